//! User-facing strings shared by both presentation adapters.

pub const TITLE: &str = "Lista de Usuários";
pub const LOADING: &str = "Carregando usuários...";
pub const ERROR_TITLE: &str = "Erro ao carregar usuários";
pub const EMPTY: &str = "Nenhum usuário encontrado";
pub const SUCCESS_BANNER: &str = "Usuários carregados com sucesso!";
pub const SIMULATED_ERROR_MESSAGE: &str = "Erro simulado para teste da interface";

pub const ACTION_REFRESH: &str = "Recarregar";
pub const ACTION_RETRY: &str = "Tentar novamente";
pub const ACTION_SIMULATE_ERROR: &str = "Testar Erro";
pub const ACTION_DISMISS: &str = "Voltar ao normal";

/// "Lista de Usuários (N)".
pub fn title_with_count(count: usize) -> String {
    format!("{} ({})", TITLE, count)
}
