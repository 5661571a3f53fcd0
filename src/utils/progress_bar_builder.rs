use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

pub(crate) struct ProgressBarBuilder {
    style_template: &'static str,
    message: String,
    length: Option<u64>,
}

impl ProgressBarBuilder {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            style_template: "{spinner:.green} {msg}",
            message: message.into(),
            length: None,
        }
    }

    pub(crate) fn with_template(mut self, template: &'static str) -> Self {
        self.style_template = template;
        self
    }

    /// Switches from a spinner to a bar counting up to `length`.
    pub(crate) fn with_length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    pub(crate) fn build(self) -> Result<ProgressBar> {
        let (pb, style) = match self.length {
            Some(length) => (ProgressBar::new(length), ProgressStyle::default_bar()),
            None => (ProgressBar::new_spinner(), ProgressStyle::default_spinner()),
        };

        pb.set_style(style.template(self.style_template)?.progress_chars("#>-"));
        pb.set_message(self.message);
        Ok(pb)
    }
}
