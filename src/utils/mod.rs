pub(crate) mod progress_bar_builder;
pub mod scatter_plotter;
