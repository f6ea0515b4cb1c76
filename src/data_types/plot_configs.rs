use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// A region requested up front by the host, in data units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionBounds {
    pub left: f64,
    pub right: f64,
}

/// Per-plot options as handed over by the page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    pub color: String,
    #[serde(alias = "logScaleX")]
    pub log_scale_x: bool,
    #[serde(alias = "logScaleY")]
    pub log_scale_y: bool,
    #[serde(alias = "gridVisible")]
    pub grid: bool,
    #[serde(alias = "xLabel")]
    pub x_label: String,
    #[serde(alias = "yLabel")]
    pub y_label: String,
    pub title: String,
    #[serde(alias = "xLabelAlign")]
    pub x_label_align: LabelAlign,
    #[serde(alias = "yLabelAlign")]
    pub y_label_align: LabelAlign,
    #[serde(alias = "titleAlign")]
    pub title_label_align: LabelAlign,
    #[serde(alias = "predeterminedRegions")]
    pub predetermined_region: Vec<RegionBounds>,
    #[serde(alias = "allowRegionMode")]
    pub allow_region_mode: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            color: "#1f77b4".to_string(),
            log_scale_x: false,
            log_scale_y: false,
            grid: false,
            x_label: String::new(),
            y_label: String::new(),
            title: String::new(),
            x_label_align: LabelAlign::Center,
            y_label_align: LabelAlign::Center,
            title_label_align: LabelAlign::Center,
            predetermined_region: Vec::new(),
            allow_region_mode: true,
        }
    }
}

impl PlotOptions {
    pub fn from_json(json: &str) -> eyre::Result<Self> {
        use eyre::WrapErr;
        serde_json::from_str(json).wrap_err("failed to parse plot options")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Pixel geometry of the plot area and the margins around it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotLayout {
    pub width: f64,
    pub height: f64,
    pub margin: Margins,
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 244.0,
            margin: Margins {
                top: 30.0,
                right: 15.0,
                bottom: 50.0,
                left: 65.0,
            },
        }
    }
}

impl PlotLayout {
    pub fn outer_width(&self) -> f64 {
        self.width + self.margin.left + self.margin.right
    }

    pub fn outer_height(&self) -> f64 {
        self.height + self.margin.top + self.margin.bottom
    }

    /// Whether a plot-local point lies inside the clip rectangle.
    pub fn clip_contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}
