#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Generated(String),
    CopyToClipboard(String),
    ShowHelp,
    RequestRender,
}
