use anyhow::Result;
use sea_orm::{EntityTrait, PaginatorTrait};

use super::setup_test_db;
use crate::{cliente, endereco, servico, tecnico, tecnico_servico, usuario};

#[tokio::test]
async fn test_tecnico_links_are_many_to_many() -> Result<()> {
    let db = setup_test_db().await?;
    let owner = cliente::create(&db, "Ana").await?;
    let s1 = servico::create(&db, "Um", None, owner.id).await?;
    let s2 = servico::create(&db, "Dois", None, owner.id).await?;
    let joao = tecnico::create(&db, Some("João")).await?;
    let maria = tecnico::create(&db, Some("Maria")).await?;

    assert!(tecnico::assign_servico(&db, joao.id, s1.id).await?);
    assert!(tecnico::assign_servico(&db, joao.id, s2.id).await?);
    assert!(tecnico::assign_servico(&db, maria.id, s1.id).await?);

    let of_joao = tecnico::servicos(&db, joao.id).await?.expect("tecnico exists");
    assert_eq!(of_joao.iter().map(|s| s.id).collect::<Vec<_>>(), vec![s1.id, s2.id]);

    let on_s1 = servico::tecnicos(&db, s1.id).await?.expect("servico exists");
    assert_eq!(on_s1.iter().map(|t| t.id).collect::<Vec<_>>(), vec![joao.id, maria.id]);
    Ok(())
}

#[tokio::test]
async fn test_assign_servico_is_idempotent() -> Result<()> {
    let db = setup_test_db().await?;
    let owner = cliente::create(&db, "Ana").await?;
    let s = servico::create(&db, "Um", None, owner.id).await?;
    let t = tecnico::create(&db, None).await?;

    assert!(tecnico::assign_servico(&db, t.id, s.id).await?);
    assert!(!tecnico::assign_servico(&db, t.id, s.id).await?);
    assert_eq!(tecnico_servico::Entity::find().count(&db).await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_assign_servico_requires_both_sides() -> Result<()> {
    let db = setup_test_db().await?;
    let t = tecnico::create(&db, Some("Rui")).await?;
    assert!(tecnico::assign_servico(&db, t.id, 42).await.is_err());
    assert!(tecnico::assign_servico(&db, 42, 1).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_deleting_servico_drops_links() -> Result<()> {
    let db = setup_test_db().await?;
    let owner = cliente::create(&db, "Ana").await?;
    let s = servico::create(&db, "Um", None, owner.id).await?;
    let t = tecnico::create(&db, Some("Rui")).await?;
    tecnico::assign_servico(&db, t.id, s.id).await?;

    assert!(servico::delete(&db, s.id).await?);
    assert_eq!(tecnico_servico::Entity::find().count(&db).await?, 0);
    assert_eq!(tecnico::servicos(&db, t.id).await?, Some(vec![]));
    Ok(())
}

#[tokio::test]
async fn test_endereco_is_zero_or_one_per_cliente() -> Result<()> {
    let db = setup_test_db().await?;
    let ana = cliente::create(&db, "Ana").await?;
    assert!(endereco::of_cliente(&db, ana.id).await?.is_none());

    let first = endereco::set_for_cliente(&db, ana.id, "Rua A, 10").await?;
    let second = endereco::set_for_cliente(&db, ana.id, "Rua B, 20").await?;
    assert_eq!(first.id, second.id);
    assert_eq!(second.rua.as_deref(), Some("Rua B, 20"));
    assert_eq!(endereco::Entity::find().count(&db).await?, 1);

    assert!(endereco::set_for_cliente(&db, 999, "Rua C").await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_deleting_cliente_detaches_endereco() -> Result<()> {
    let db = setup_test_db().await?;
    let ana = cliente::create(&db, "Ana").await?;
    let addr = endereco::set_for_cliente(&db, ana.id, "Rua A, 10").await?;

    assert!(cliente::delete(&db, ana.id).await?);
    let detached = endereco::find(&db, addr.id).await?.expect("address kept");
    assert_eq!(detached.cliente_id, None);
    Ok(())
}

#[tokio::test]
async fn test_usuario_email_is_unique() -> Result<()> {
    let db = setup_test_db().await?;
    let u = usuario::create(&db, "ana@example.com", "$argon2id$fake").await?;
    assert_eq!(usuario::find_by_email(&db, "ana@example.com").await?.map(|m| m.id), Some(u.id));
    assert!(usuario::create(&db, "ana@example.com", "$argon2id$other").await.is_err());
    assert!(usuario::create(&db, "not-an-email", "$argon2id$x").await.is_err());

    let updated = usuario::set_senha_hash(&db, u.id, "$argon2id$new".into()).await?.expect("user exists");
    assert_eq!(updated.senha_hash, "$argon2id$new");
    assert!(usuario::set_senha_hash(&db, 999, "$argon2id$new".into()).await?.is_none());
    Ok(())
}
