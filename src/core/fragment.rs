/// Style shared by every dot, taken verbatim from the target document.
const STYLE: &str = "display:inline;fill:#ffaaa4;fill-opacity:1;stroke:none;stroke-width:1.11154;stroke-linecap:butt;stroke-linejoin:bevel;stroke-miterlimit:4;stroke-dasharray:none;stroke-opacity:1";

const RADIUS: u32 = 10;

/// One attribute per line, indented to sit inside the `<circle` tag.
const ATTR_SEP: &str = "\n    ";

/// Fixed-point with exactly 3 fractional digits, trailing zeros kept.
pub fn format_coord(value: f64) -> String {
    format!("{:.3}", value)
}

/// Builds `<circle>` markup fragments, handing out one id per call.
///
/// The fragment counter lives here instead of in static state so a
/// fresh builder always starts at `pacmandot1` and tests stay
/// order-independent.
#[derive(Debug)]
pub struct FragmentBuilder {
    counter: u32,
}

impl FragmentBuilder {
    pub fn new() -> Self {
        Self { counter: 1 }
    }

    /// Id the next call to [`build`](Self::build) will use.
    pub fn next_id(&self) -> u32 {
        self.counter
    }

    /// Produces the fragment for a dot centered at `(x, y)` and
    /// advances the counter.
    pub fn build(&mut self, x: f64, y: f64) -> String {
        let n = self.counter;
        self.counter += 1;

        let attrs = [
            format!("style=\"{}\"", STYLE),
            format!("id=\"pacmandot{}\"", n),
            format!("cx=\"{}\"", format_coord(x)),
            format!("cy=\"{}\"", format_coord(y)),
            format!("inkscape:label=\"Dot {}\"", n),
            format!("r=\"{}\"", RADIUS),
        ];

        let mut fragment = String::from("<circle");
        for attr in &attrs {
            fragment.push_str(ATTR_SEP);
            fragment.push_str(attr);
        }
        fragment.push_str(" />");

        fragment
    }
}

impl Default for FragmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
