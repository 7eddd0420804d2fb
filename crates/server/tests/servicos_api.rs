mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{build_app, create_cliente, send};

#[tokio::test]
async fn create_with_unknown_cliente_persists_nothing() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(&app, Method::POST, "/servicos", Some(json!({"titulo": "Reparo", "cliente_id": 999}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"erro": "cliente não encontrado"}));

    let (_, list) = send(&app, Method::GET, "/servicos", None).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn list_includes_cliente_nome() -> anyhow::Result<()> {
    let app = build_app().await?;
    let cid = create_cliente(&app, "Ana").await?;

    let (status, created) = send(
        &app,
        Method::POST,
        "/servicos",
        Some(json!({"titulo": "Reparo", "descricao": "pia", "cliente_id": cid})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    let sid = created["id"].as_i64().expect("id");
    assert_eq!(created, json!({"id": sid, "titulo": "Reparo", "descricao": "pia", "cliente_id": cid}));

    let (status, list) = send(&app, Method::GET, "/servicos", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        list,
        json!([{"id": sid, "titulo": "Reparo", "descricao": "pia", "cliente_id": cid, "cliente_nome": "Ana"}])
    );
    Ok(())
}

#[tokio::test]
async fn descricao_is_optional_on_create() -> anyhow::Result<()> {
    let app = build_app().await?;
    let cid = create_cliente(&app, "Ana").await?;

    let (status, created) = send(&app, Method::POST, "/servicos", Some(json!({"titulo": "Visita", "cliente_id": cid}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(created["descricao"].is_null());
    Ok(())
}

#[tokio::test]
async fn get_returns_summary_fields() -> anyhow::Result<()> {
    let app = build_app().await?;
    let cid = create_cliente(&app, "Ana").await?;
    let (_, created) = send(&app, Method::POST, "/servicos", Some(json!({"titulo": "Reparo", "descricao": "pia", "cliente_id": cid}))).await?;
    let sid = created["id"].as_i64().expect("id");

    let (status, body) = send(&app, Method::GET, &format!("/servicos/{sid}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": sid, "titulo": "Reparo", "descricao": "pia"}));

    let (status, list) = send(&app, Method::GET, &format!("/clientes/{cid}/servicos"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([{"id": sid, "titulo": "Reparo", "descricao": "pia"}]));
    Ok(())
}

#[tokio::test]
async fn put_overwrites_and_requires_both_keys() -> anyhow::Result<()> {
    let app = build_app().await?;
    let cid = create_cliente(&app, "Ana").await?;
    let (_, created) = send(&app, Method::POST, "/servicos", Some(json!({"titulo": "Reparo", "descricao": "pia", "cliente_id": cid}))).await?;
    let uri = format!("/servicos/{}", created["id"]);

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({"titulo": "Troca"}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["erro"].is_string());

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({"titulo": "Troca", "descricao": null}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"mensagem": "serviço atualizado com sucesso"}));

    let (_, fetched) = send(&app, Method::GET, &uri, None).await?;
    assert_eq!(fetched["titulo"], "Troca");
    assert!(fetched["descricao"].is_null());
    Ok(())
}

#[tokio::test]
async fn unknown_servico_is_404() -> anyhow::Result<()> {
    let app = build_app().await?;
    let expected = json!({"erro": "serviço não encontrado"});

    let (status, body) = send(&app, Method::GET, "/servicos/5", None).await?;
    assert_eq!((status, body), (StatusCode::NOT_FOUND, expected.clone()));

    let (status, body) = send(&app, Method::PUT, "/servicos/5", Some(json!({"titulo": "T", "descricao": null}))).await?;
    assert_eq!((status, body), (StatusCode::NOT_FOUND, expected.clone()));

    let (status, body) = send(&app, Method::DELETE, "/servicos/5", None).await?;
    assert_eq!((status, body), (StatusCode::NOT_FOUND, expected));
    Ok(())
}

#[tokio::test]
async fn delete_removes_servico() -> anyhow::Result<()> {
    let app = build_app().await?;
    let cid = create_cliente(&app, "Ana").await?;
    let (_, created) = send(&app, Method::POST, "/servicos", Some(json!({"titulo": "Reparo", "cliente_id": cid}))).await?;
    let uri = format!("/servicos/{}", created["id"]);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"mensagem": "serviço removido com sucesso"}));

    let (status, _) = send(&app, Method::GET, &uri, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn deleting_cliente_orphans_its_servicos() -> anyhow::Result<()> {
    let app = build_app().await?;
    let cid = create_cliente(&app, "Ana").await?;
    let (_, created) = send(&app, Method::POST, "/servicos", Some(json!({"titulo": "Reparo", "cliente_id": cid}))).await?;

    let (status, _) = send(&app, Method::DELETE, &format!("/clientes/{cid}"), None).await?;
    assert_eq!(status, StatusCode::OK);

    let (status, list) = send(&app, Method::GET, "/servicos", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list[0]["id"], created["id"]);
    assert_eq!(list[0]["cliente_id"], cid);
    assert!(list[0]["cliente_nome"].is_null());

    let (status, _) = send(&app, Method::GET, &format!("/servicos/{}", created["id"]), None).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn blank_titulo_is_400() -> anyhow::Result<()> {
    let app = build_app().await?;
    let cid = create_cliente(&app, "Ana").await?;
    let (status, body) = send(&app, Method::POST, "/servicos", Some(json!({"titulo": "", "cliente_id": cid}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["erro"].is_string());
    Ok(())
}
