use crate::error::{Error, Result};
use crate::types::ScoreSeries;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;

// Upper bound of the score axis. Phred scores stop at 40.
const SCORE_AXIS_END: u32 = 41;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotFormat {
    Svg,
    Png,
    Jpeg,
    Bmp,
}

impl PlotFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "svg" => Some(PlotFormat::Svg),
            "png" => Some(PlotFormat::Png),
            "jpg" | "jpeg" => Some(PlotFormat::Jpeg),
            "bmp" => Some(PlotFormat::Bmp),
            _ => None,
        }
    }

    fn suffix(&self) -> &'static str {
        match self {
            PlotFormat::Svg => ".svg",
            PlotFormat::Png => ".png",
            PlotFormat::Jpeg => ".jpg",
            PlotFormat::Bmp => ".bmp",
        }
    }
}

/// Renders a [`ScoreSeries`] as a position vs. score scatter plot.
///
/// Each call builds its own drawing area, so one plotter can be shared across
/// reads without carrying any figure state between them.
#[derive(Debug, Clone)]
pub struct ScatterPlotter {
    width: u32,
    height: u32,
    point_size: u32,
    point_color: u32,
    canvas_background: u32,
}

impl Default for ScatterPlotter {
    fn default() -> Self {
        Self::new(800, 600, 3)
    }
}

fn hex_color(rgb: u32) -> RGBColor {
    RGBColor((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

fn render_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> Error {
    Error::Render(err.to_string())
}

impl ScatterPlotter {
    pub fn new(width: u32, height: u32, point_size: u32) -> Self {
        Self {
            width,
            height,
            point_size,
            point_color: 0x1F77B4,
            canvas_background: 0xFFFFFF,
        }
    }

    /// Writes the plot to `path`, replacing whatever is there. The format is
    /// taken from the extension. The image is rendered next to the
    /// destination first and renamed into place once complete.
    pub fn render(&self, series: &ScoreSeries, title: Option<&str>, path: &Path) -> Result<()> {
        let format = PlotFormat::from_path(path)
            .ok_or_else(|| Error::UnsupportedFormat(path.to_path_buf()))?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut builder = Builder::new();
        builder.prefix(".pore-plot-").suffix(format.suffix());
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // Subject to the umask, like a plain create
            builder.permissions(fs::Permissions::from_mode(0o644));
        }
        let temp_file = builder.tempfile_in(dir)?;
        // An overwrite keeps the existing file's mode
        if let Ok(metadata) = fs::metadata(path) {
            temp_file.as_file().set_permissions(metadata.permissions())?;
        }

        match format {
            PlotFormat::Svg => {
                let mut svg = String::new();
                {
                    let root = SVGBackend::with_string(&mut svg, (self.width, self.height))
                        .into_drawing_area();
                    self.draw(&root, series, title, true).map_err(render_error)?;
                }
                let mut file = temp_file.as_file();
                file.write_all(svg.as_bytes())?;
                file.flush()?;
            }
            PlotFormat::Png | PlotFormat::Jpeg | PlotFormat::Bmp => {
                // Raster text needs a font backend, so bitmaps are drawn without labels.
                let root = BitMapBackend::new(temp_file.path(), (self.width, self.height))
                    .into_drawing_area();
                self.draw(&root, series, None, false).map_err(render_error)?;
            }
        }

        temp_file.persist(path).map_err(|e| Error::Io(e.error))?;
        log::debug!("Wrote {} point(s) to {}", series.len(), path.display());
        Ok(())
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        series: &ScoreSeries,
        title: Option<&str>,
        labelled: bool,
    ) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&hex_color(self.canvas_background))?;

        // Keep a non-empty x range so an empty read still yields a valid chart
        let x_end = (series.len() as u32).max(1);

        let mut builder = ChartBuilder::on(root);
        builder.margin(20);
        if labelled {
            builder.x_label_area_size(40).y_label_area_size(50);
            if let Some(title) = title {
                builder.caption(title, ("sans-serif", 20));
            }
        }
        let mut chart = builder.build_cartesian_2d(0u32..x_end, 0u32..SCORE_AXIS_END)?;

        if labelled {
            chart
                .configure_mesh()
                .x_desc("position")
                .y_desc("score")
                .draw()?;
        } else {
            chart
                .configure_mesh()
                .label_style(("sans-serif", 12).into_font().color(&TRANSPARENT))
                .draw()?;
        }

        let point_style = hex_color(self.point_color).filled();
        chart.draw_series(series.points().iter().map(|point| {
            Circle::new(
                (point.position as u32, point.score as u32),
                self.point_size,
                point_style,
            )
        }))?;

        root.present()?;
        Ok(())
    }
}

/// Renders `series` to `path` with the default plot settings.
pub fn plot_scores(series: &ScoreSeries, path: &Path) -> Result<()> {
    ScatterPlotter::default().render(series, None, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::decode_quality;
    use std::fs;
    use tempfile::tempdir;

    fn count_points(svg: &str) -> usize {
        svg.matches("<circle").count()
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(PlotFormat::from_path(Path::new("a.svg")), Some(PlotFormat::Svg));
        assert_eq!(PlotFormat::from_path(Path::new("a.PNG")), Some(PlotFormat::Png));
        assert_eq!(PlotFormat::from_path(Path::new("a.jpeg")), Some(PlotFormat::Jpeg));
        assert_eq!(PlotFormat::from_path(Path::new("a.bmp")), Some(PlotFormat::Bmp));
        assert_eq!(PlotFormat::from_path(Path::new("a.pdf")), None);
        assert_eq!(PlotFormat::from_path(Path::new("plot")), None);
    }

    #[test]
    fn test_svg_has_one_point_per_score() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("read.svg");
        let series = decode_quality("!#%IIH").unwrap();

        ScatterPlotter::default()
            .render(&series, Some("read_1"), &path)
            .unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert_eq!(count_points(&svg), 6);
        assert!(svg.contains("read_1"));
        assert!(svg.contains("position"));
        assert!(svg.contains("score"));
    }

    #[test]
    fn test_empty_series_still_writes_plot() {
        let dir = tempdir().unwrap();
        let svg_path = dir.path().join("empty.svg");
        let png_path = dir.path().join("empty.png");
        let series = decode_quality("").unwrap();

        plot_scores(&series, &svg_path).unwrap();
        plot_scores(&series, &png_path).unwrap();

        let svg = fs::read_to_string(&svg_path).unwrap();
        assert_eq!(count_points(&svg), 0);
        assert!(fs::metadata(&png_path).unwrap().len() > 0);
    }

    #[test]
    fn test_png_output() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("read.png");
        plot_scores(&decode_quality("012").unwrap(), &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_second_render_replaces_first() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        let plotter = ScatterPlotter::new(400, 300, 2);

        plotter.render(&decode_quality("IIIIIIII").unwrap(), None, &path).unwrap();
        plotter.render(&decode_quality("!!").unwrap(), None, &path).unwrap();
        let replaced = fs::read_to_string(&path).unwrap();
        assert_eq!(count_points(&replaced), 2);

        let fresh_path = dir.path().join("fresh.svg");
        plotter.render(&decode_quality("!!").unwrap(), None, &fresh_path).unwrap();
        assert_eq!(replaced, fs::read_to_string(&fresh_path).unwrap());

        // No temporary files left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_unsupported_extension_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plot.txt");
        let err = plot_scores(&decode_quality("!!").unwrap(), &path).unwrap_err();

        assert!(matches!(err, Error::UnsupportedFormat(_)));
        assert!(!path.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("plot.svg");
        let err = plot_scores(&decode_quality("!!").unwrap(), &path).unwrap_err();

        assert!(matches!(err, Error::Io(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_plot_permissions_follow_umask_and_existing_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let mode = |path: &Path| fs::metadata(path).unwrap().permissions().mode() & 0o777;

        // A plain create shows what the umask leaves of 0o666
        let reference = dir.path().join("reference");
        fs::File::create(&reference).unwrap();
        let expected_new = mode(&reference) & 0o644;

        let path = dir.path().join("m.png");
        plot_scores(&decode_quality("012").unwrap(), &path).unwrap();
        assert_eq!(mode(&path), expected_new);

        fs::set_permissions(&path, fs::Permissions::from_mode(0o664)).unwrap();
        plot_scores(&decode_quality("!!").unwrap(), &path).unwrap();
        assert_eq!(mode(&path), 0o664);

        let svg_path = dir.path().join("m.svg");
        fs::write(&svg_path, "old").unwrap();
        fs::set_permissions(&svg_path, fs::Permissions::from_mode(0o640)).unwrap();
        plot_scores(&decode_quality("!!").unwrap(), &svg_path).unwrap();
        assert_eq!(mode(&svg_path), 0o640);
    }
}
