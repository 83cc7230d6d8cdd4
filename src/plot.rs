//! Sampling of a function of `x` over a domain, in pixel space.

use crate::error::Error;
use crate::expr::Expr;

/// The range of `x` values to plot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    /// Smallest plotted `x`
    pub x_min: f64,
    /// Largest plotted `x`
    pub x_max: f64,
}

impl Domain {
    /// Create the domain `[x_min, x_max]`
    pub fn new(x_min: f64, x_max: f64) -> Self {
        Self { x_min, x_max }
    }

    /// Width of the domain
    pub fn range(&self) -> f64 {
        self.x_max - self.x_min
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::new(-10.0, 10.0)
    }
}

/// Canvas size and plotted domain.
///
/// One sample is taken per horizontal pixel, so `width` is also the number
/// of sample points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotConfig {
    /// Canvas width in pixels, at least 2
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Plotted range of `x`
    pub domain: Domain,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 280,
            domain: Domain::default(),
        }
    }
}

impl PlotConfig {
    /// Canvas width and height in pixels
    pub fn with_size(self, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    /// Plotted range of `x`
    pub fn with_domain(self, domain: Domain) -> Self {
        Self { domain, ..self }
    }

    fn validate(&self) -> Result<(), Error> {
        if self.width < 2 {
            return Err(Error::PlotError(format!(
                "canvas width must be at least 2, got {}",
                self.width
            )));
        }
        if self.height == 0 {
            return Err(Error::PlotError("canvas height must not be zero".into()));
        }
        let Domain { x_min, x_max } = self.domain;
        // the range must not overflow either, or every sample is lost
        if !x_min.is_finite()
            || !x_max.is_finite()
            || x_min >= x_max
            || !self.domain.range().is_finite()
        {
            return Err(Error::PlotError(format!(
                "invalid domain [{}, {}]",
                x_min, x_max
            )));
        }
        Ok(())
    }
}

/// Affine mapping between the plotted domain and pixel space.
///
/// The `y` domain is centered on zero and has the same scale as the `x`
/// domain, so that the plot is not distorted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
    x_min: f64,
    x_range: f64,
    y_min: f64,
    y_max: f64,
}

impl Viewport {
    /// Viewport for the canvas and domain of `config`
    pub fn new(config: &PlotConfig) -> Self {
        let width = f64::from(config.width);
        let height = f64::from(config.height);
        let x_range = config.domain.range();
        let y_min = -((height / width) * x_range) / 2.0;
        Self {
            width,
            height,
            x_min: config.domain.x_min,
            x_range,
            y_min,
            y_max: -y_min,
        }
    }

    /// Range of `y` values visible on the canvas
    pub fn y_bounds(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    /// Map a domain `x` to a horizontal pixel coordinate
    pub fn x_to_px(&self, x: f64) -> f64 {
        (x - self.x_min) * self.width / self.x_range
    }

    /// Map a function value to a vertical pixel coordinate, growing
    /// downwards
    pub fn y_to_px(&self, y: f64) -> f64 {
        self.height - ((y - self.y_min) * self.height / (self.y_max - self.y_min))
    }
}

/// One sample of the plotted function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    /// Domain value of the sample
    pub x: f64,
    /// Horizontal pixel coordinate
    pub pixel_x: f64,
    /// Vertical pixel coordinate, or `None` for a break in the path, when
    /// the function value is not finite
    pub pixel_y: Option<f64>,
}

impl SamplePoint {
    /// Does this sample end the current path segment?
    pub fn is_break(&self) -> bool {
        self.pixel_y.is_none()
    }
}

/// Sample the function `expression` of `x` once per horizontal pixel of the
/// canvas, over the configured domain.
///
/// The expression is parsed once, so lexing or syntax errors are reported
/// before any point is produced. Non-finite values are not errors, they
/// produce breaks in the path.
///
/// # Examples
///
/// ```
/// # use plotcalc::{sample, Domain, PlotConfig};
/// let config = PlotConfig::default()
///     .with_size(21, 10)
///     .with_domain(Domain::new(-10.0, 10.0));
/// let points = sample("1/x", &config).unwrap();
/// assert_eq!(points.len(), 21);
/// assert_eq!(points.iter().filter(|p| p.is_break()).count(), 1);
/// assert!(points[10].is_break());
///
/// assert!(sample("(1/x", &config).is_err());
/// ```
pub fn sample(expression: &str, config: &PlotConfig) -> Result<Vec<SamplePoint>, Error> {
    config.validate()?;
    let expr = Expr::parse(expression)?;
    let viewport = Viewport::new(config);

    let Domain { x_min, .. } = config.domain;
    let x_range = config.domain.range();
    let last = f64::from(config.width - 1);

    let mut points = Vec::with_capacity(config.width as usize);
    for i in 0..config.width {
        let t = f64::from(i) / last;
        let x = x_min + t * x_range;
        let y = expr.eval_at(x)?;
        points.push(SamplePoint {
            x,
            pixel_x: viewport.x_to_px(x),
            pixel_y: if y.is_finite() {
                Some(viewport.y_to_px(y))
            } else {
                None
            },
        });
    }

    tracing::debug!(
        expression,
        points = points.len(),
        breaks = points.iter().filter(|p| p.is_break()).count(),
        "sampled function"
    );
    Ok(points)
}

/// Split sample points into drawable polylines, in pixel coordinates.
/// A break ends the current segment, and empty segments are skipped.
pub fn segments(points: &[SamplePoint]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for point in points {
        match point.pixel_y {
            Some(pixel_y) => current.push((point.pixel_x, pixel_y)),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Extract the expression to plot from a user input, accepting the forms
/// `plot y=<expr>`, `plot <expr>`, `y=<expr>` or a bare `<expr>`.
///
/// Returns `None` if the expression does not mention `x`.
///
/// ```
/// # use plotcalc::parse_plot_input;
/// assert_eq!(parse_plot_input("plot y=28*x+4"), Some("28*x+4"));
/// assert_eq!(parse_plot_input("Y = 0.5*x^2 - 3"), Some("0.5*x^2 - 3"));
/// assert_eq!(parse_plot_input("2*pi"), None);
/// ```
pub fn parse_plot_input(input: &str) -> Option<&str> {
    let mut expression = input.trim();

    if let Some(rest) = strip_prefix_ignore_case(expression, "plot") {
        if rest.starts_with(char::is_whitespace) {
            expression = rest.trim_start();
        }
    }
    if let Some(rest) = strip_prefix_ignore_case(expression, "y") {
        if let Some(rest) = rest.trim_start().strip_prefix('=') {
            expression = rest.trim_start();
        }
    }

    if expression.contains(|c: char| c.eq_ignore_ascii_case(&'x')) {
        Some(expression)
    } else {
        None
    }
}

fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&input[prefix.len()..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_plot_input, sample, segments, Domain, PlotConfig, SamplePoint, Viewport};
    use crate::error::Error;
    use crate::test_utils::init_test_logging;
    use test_case::test_case;

    fn plot_config(width: u32, height: u32, x_min: f64, x_max: f64) -> PlotConfig {
        PlotConfig::default()
            .with_size(width, height)
            .with_domain(Domain::new(x_min, x_max))
    }

    #[test]
    fn defaults() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 280);
        assert_eq!(config.domain, Domain::new(-10.0, 10.0));
    }

    #[test]
    fn viewport() {
        let viewport = Viewport::new(&plot_config(200, 100, -10.0, 10.0));
        assert_eq!(viewport.y_bounds(), (-5.0, 5.0));
        assert_eq!(viewport.x_to_px(-10.0), 0.0);
        assert_eq!(viewport.x_to_px(0.0), 100.0);
        assert_eq!(viewport.x_to_px(10.0), 200.0);
        assert_eq!(viewport.y_to_px(0.0), 50.0);
        assert_eq!(viewport.y_to_px(5.0), 0.0);
        assert_eq!(viewport.y_to_px(-5.0), 100.0);
    }

    #[test]
    fn pole_produces_one_break() {
        init_test_logging();
        let points = sample("1/x", &plot_config(21, 10, -10.0, 10.0)).unwrap();
        assert_eq!(points.len(), 21);

        let breaks: Vec<usize> = points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_break())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(breaks, vec![10]);
        assert_eq!(points[10].x, 0.0);

        let segments = segments(&points);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].len(), 10);
        assert_eq!(segments[1].len(), 10);
    }

    #[test]
    fn samples_cover_the_domain() {
        let points = sample("x", &plot_config(5, 4, -2.0, 2.0)).unwrap();
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_eq!(points[0].pixel_x, 0.0);
        assert_eq!(points[4].pixel_x, 5.0);
        // y = x crosses the vertical center at x = 0
        assert_eq!(points[2].pixel_y, Some(2.0));
        assert!(points.iter().all(|p| !p.is_break()));
    }

    #[test]
    fn constant_function() {
        let points = sample("2*pi - pi*2 + 1", &plot_config(20, 20, -10.0, 10.0)).unwrap();
        // square canvas, so the y domain is [-10, 10] too
        for point in &points {
            assert_eq!(point.pixel_y, Some(9.0));
        }
    }

    #[test]
    fn all_breaks() {
        let points = sample("(0-1)^(1/2) + x", &plot_config(10, 10, -1.0, 1.0)).unwrap();
        assert!(points.iter().all(SamplePoint::is_break));
        assert!(segments(&points).is_empty());
    }

    #[test_case("2+a" => Err(Error::LexError { character: 'a', position: 2 }) ; "lexing error")]
    #[test_case("(x+1" => Err(Error::SyntaxError("mismatched parentheses".into())) ; "syntax error")]
    #[test_case("x+" => Err(Error::EvalError("stack underflow".into())) ; "malformed expression")]
    #[test_case("" => Err(Error::SyntaxError("empty expression".into())) ; "empty expression")]
    fn invalid_expression(expression: &str) -> Result<Vec<SamplePoint>, Error> {
        sample(expression, &PlotConfig::default())
    }

    #[test_case(plot_config(1, 10, -1.0, 1.0) ; "single pixel")]
    #[test_case(plot_config(10, 0, -1.0, 1.0) ; "no height")]
    #[test_case(plot_config(10, 10, 1.0, 1.0) ; "empty domain")]
    #[test_case(plot_config(10, 10, 1.0, -1.0) ; "inverted domain")]
    #[test_case(plot_config(10, 10, f64::NEG_INFINITY, 1.0) ; "infinite domain")]
    #[test_case(plot_config(10, 10, -1e308, 1e308) ; "overflowing domain")]
    fn invalid_config(config: PlotConfig) {
        assert!(matches!(sample("x", &config), Err(Error::PlotError(_))));
    }

    #[test]
    fn segments_skip_leading_and_repeated_breaks() {
        let point = |pixel_y: Option<f64>| SamplePoint {
            x: 0.0,
            pixel_x: 1.0,
            pixel_y,
        };
        let points = [
            point(None),
            point(Some(1.0)),
            point(None),
            point(None),
            point(Some(2.0)),
            point(Some(3.0)),
        ];
        assert_eq!(
            segments(&points),
            vec![vec![(1.0, 1.0)], vec![(1.0, 2.0), (1.0, 3.0)]]
        );
    }

    #[test_case("plot y=2*x+1" => Some("2*x+1") ; "plot with y")]
    #[test_case("plot 2*x+1" => Some("2*x+1") ; "plot without y")]
    #[test_case("PLOT   y = x^2" => Some("x^2") ; "case and spaces")]
    #[test_case("y=0.5*x^2 - 3" => Some("0.5*x^2 - 3") ; "y prefix")]
    #[test_case("  28*x+4  " => Some("28*x+4") ; "bare expression")]
    #[test_case("plot y=2" => None ; "constant function")]
    #[test_case("plotx" => Some("plotx") ; "plot keyword needs whitespace")]
    #[test_case("help" => None ; "not a plot")]
    fn plot_input(input: &str) -> Option<&str> {
        parse_plot_input(input)
    }
}
