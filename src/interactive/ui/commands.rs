#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ExecuteSearch,
    ShowMessage(String),
    ClearMessage,
}
