use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserListIntent {
    /// "Testar Erro": show a synthetic error over whatever the query holds.
    SimulateError { message: String },
    /// "Voltar ao normal": drop the synthetic error.
    DismissSimulatedError,
    /// A refresh was requested. Clears any synthetic error.
    RefreshRequested,
    /// The refetch behind a refresh finished, successfully or not.
    RefreshCompleted,
    /// Banner timer fired. Ignored unless `generation` is still current.
    HideSuccessBanner { generation: u64 },
}

impl Intent for UserListIntent {}
