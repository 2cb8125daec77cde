//! Render configuration.

/// Layout of rendered layers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// Each layer framed with `+---+` borders and `|` edges.
    #[default]
    Boxed,
    /// Bare rows of digits, for larger grids.
    Compact,
}

/// What part of a grid to render, and how.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    layer: Option<usize>,
    time_point: Option<usize>,
    style: RenderStyle,
}

/// Builder for [`RenderOptions`].
#[derive(Default)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}

impl RenderOptions {
    /// Create a new builder. Defaults: every layer, every time point, boxed.
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::default()
    }

    /// Only this z layer, if set.
    pub fn layer(&self) -> Option<usize> {
        self.layer
    }

    /// Only this time point, if set. Valid for 4-axis grids only.
    pub fn time_point(&self) -> Option<usize> {
        self.time_point
    }

    /// Layer layout.
    pub fn style(&self) -> RenderStyle {
        self.style
    }
}

impl RenderOptionsBuilder {
    /// Render only z layer `layer`.
    pub fn layer(mut self, layer: usize) -> Self {
        self.options.layer = Some(layer);
        self
    }

    /// Render only time point `t` of a 4-axis grid.
    pub fn time_point(mut self, t: usize) -> Self {
        self.options.time_point = Some(t);
        self
    }

    /// Set the layout (default: [`RenderStyle::Boxed`]).
    pub fn style(mut self, style: RenderStyle) -> Self {
        self.options.style = style;
        self
    }

    /// Finish. Ranges are checked against the grid at render time.
    pub fn build(self) -> RenderOptions {
        self.options
    }
}
