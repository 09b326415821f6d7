mod common;

use common::{ervin, leanne, make_controller, ScriptedFetcher, Step};
use userlist::ui::text::{run_plain, TextPresenter};
use userlist::ui::users::RenderMode;

fn output_of(presenter: TextPresenter<Vec<u8>>) -> String {
    String::from_utf8(presenter.into_inner()).unwrap()
}

#[tokio::test(start_paused = true)]
async fn prints_loading_then_cards() {
    let fetcher = ScriptedFetcher::new(vec![Step::Users(vec![leanne(), ervin()])]);
    let controller = make_controller(&fetcher);
    let mut presenter = TextPresenter::new(Vec::new());

    let mode = run_plain(&controller, &mut presenter).await.unwrap();
    assert_eq!(mode.users().len(), 2);

    let out = output_of(presenter);
    assert!(out.starts_with("Carregando usuários...\n\n"));
    assert!(out.contains("Lista de Usuários (2)\n[Testar Erro] [Recarregar]\n"));
    assert!(out.contains("Ervin Howell\nShanna@melissa.tv\nWisokyburgh\n"));
    assert!(!out.contains("Usuários carregados com sucesso!"));
}

#[tokio::test(start_paused = true)]
async fn prints_error_after_retries() {
    let fetcher = ScriptedFetcher::new(vec![Step::Fail(500), Step::Fail(500), Step::Fail(500)]);
    let controller = make_controller(&fetcher);
    let mut presenter = TextPresenter::new(Vec::new());

    let mode = run_plain(&controller, &mut presenter).await.unwrap();
    assert!(matches!(mode, RenderMode::RealError { .. }));
    assert_eq!(fetcher.calls(), 3);

    let out = output_of(presenter);
    assert!(out.ends_with(
        "Erro ao carregar usuários\nErro ao buscar usuários\n[Tentar novamente]\n\n"
    ));
    // Retries do not repaint the loading block.
    assert_eq!(out.matches("Carregando usuários...").count(), 1);
}

#[tokio::test(start_paused = true)]
async fn prints_empty_state() {
    let fetcher = ScriptedFetcher::new(vec![Step::Users(Vec::new())]);
    let controller = make_controller(&fetcher);
    let mut presenter = TextPresenter::new(Vec::new());

    let mode = run_plain(&controller, &mut presenter).await.unwrap();
    assert_eq!(mode, RenderMode::Empty);
    assert!(output_of(presenter).ends_with("Nenhum usuário encontrado\n\n"));
}

#[tokio::test(start_paused = true)]
async fn already_settled_controller_prints_once() {
    let fetcher = ScriptedFetcher::new(vec![Step::Users(vec![leanne()])]);
    let controller = make_controller(&fetcher);
    controller.mount();
    tokio::time::sleep(std::time::Duration::from_secs(1)).await;

    let mut presenter = TextPresenter::new(Vec::new());
    run_plain(&controller, &mut presenter).await.unwrap();

    let out = output_of(presenter);
    assert!(!out.contains("Carregando"));
    assert_eq!(out.matches("Lista de Usuários (1)").count(), 1);
    assert_eq!(fetcher.calls(), 1);
}
