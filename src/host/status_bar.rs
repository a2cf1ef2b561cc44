/// Content style of the system status bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBarStyle {
    /// Dark glyphs, for light backgrounds such as the home screen.
    #[default]
    Dark,
    /// Light glyphs, over the exhibit's video header.
    Light,
}
