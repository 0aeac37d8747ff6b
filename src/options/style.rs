use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Style", inline)]
#[serde(default)]
/// Presentation values handed to the render sink untouched.
pub struct StyleOptions {
    /// Stroke color of the static base path.
    #[schemars(title = "Path Color")]
    pub path_color: String,
    /// Stroke width of both the base path and the beam.
    #[schemars(title = "Path Width", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub path_width: f64,
    /// Opacity of the static base path.
    #[schemars(title = "Path Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub path_opacity: f64,
    /// Color at the head of the moving highlight.
    #[schemars(title = "Gradient Start")]
    pub gradient_start_color: String,
    /// Color at the tail of the moving highlight.
    #[schemars(title = "Gradient Stop")]
    pub gradient_stop_color: String,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            path_color: "gray".to_owned(),
            path_width: 2.0,
            path_opacity: 0.2,
            gradient_start_color: "#ffaa40".to_owned(),
            gradient_stop_color: "#9c40ff".to_owned(),
        }
    }
}
