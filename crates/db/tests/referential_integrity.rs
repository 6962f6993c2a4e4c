//! Integration tests for the relational invariants.
//!
//! - Deleting a category cascades to its hex colors
//! - Deleting a season nulls `season_id` on hosts and users
//! - Deleting either side of the season/color relation removes only the
//!   membership rows
//! - Dangling foreign keys are rejected

use assert_matches::assert_matches;
use sqlx::PgPool;
use seasons_db::models::category::CreateCategory;
use seasons_db::models::hex_color::CreateHexColor;
use seasons_db::models::host::CreateHost;
use seasons_db::models::season::CreateSeason;
use seasons_db::models::user::CreateUser;
use seasons_db::repositories::{CategoryRepo, HexColorRepo, HostRepo, SeasonRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_color(pool: &PgPool, hex_code: &str, name: &str) -> (i64, i64) {
    let category = CategoryRepo::create(
        pool,
        &CreateCategory {
            name: format!("Category for {name}"),
        },
    )
    .await
    .unwrap();
    let color = HexColorRepo::create(
        pool,
        &CreateHexColor {
            hex_code: hex_code.to_string(),
            name: name.to_string(),
            category_id: category.id,
        },
    )
    .await
    .unwrap();
    (category.id, color.id)
}

fn assert_fk_violation(err: sqlx::Error) {
    assert_matches!(err, sqlx::Error::Database(ref db_err) => {
        assert_eq!(db_err.code().as_deref(), Some("23503"));
    });
}

// ---------------------------------------------------------------------------
// Cascades
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_category_cascades_to_hex_colors(pool: PgPool) {
    let (category_id, color_id) = seed_color(&pool, "#B22222", "Firebrick").await;

    assert!(CategoryRepo::delete(&pool, category_id).await.unwrap());

    assert!(HexColorRepo::find_by_id(&pool, color_id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_season_removes_memberships_but_keeps_colors(pool: PgPool) {
    let (_, color_id) = seed_color(&pool, "#000080", "Navy").await;
    let season = SeasonRepo::create(
        &pool,
        &CreateSeason {
            name: "True Winter".to_string(),
            colors: vec![color_id],
        },
    )
    .await
    .unwrap();

    assert!(SeasonRepo::delete(&pool, season.id).await.unwrap());

    // The color survives; only the membership rows are gone.
    assert!(HexColorRepo::find_by_id(&pool, color_id)
        .await
        .unwrap()
        .is_some());
    assert!(SeasonRepo::color_ids(&pool, season.id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_color_removes_it_from_season_memberships(pool: PgPool) {
    let (_, navy_id) = seed_color(&pool, "#000080", "Navy").await;
    let (_, teal_id) = seed_color(&pool, "#008080", "Teal").await;
    let season = SeasonRepo::create(
        &pool,
        &CreateSeason {
            name: "Deep Winter".to_string(),
            colors: vec![navy_id, teal_id],
        },
    )
    .await
    .unwrap();

    assert!(HexColorRepo::delete(&pool, navy_id).await.unwrap());

    let remaining = SeasonRepo::find_by_id(&pool, season.id).await.unwrap().unwrap();
    assert_eq!(remaining.colors, vec![teal_id]);
}

// ---------------------------------------------------------------------------
// SET NULL on season delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_season_nulls_host_reference(pool: PgPool) {
    let season = SeasonRepo::create(
        &pool,
        &CreateSeason {
            name: "Bright Spring".to_string(),
            colors: vec![],
        },
    )
    .await
    .unwrap();
    let host = HostRepo::create(
        &pool,
        &CreateHost {
            name: "Alma".to_string(),
            picture: "https://example.com/alma.png".to_string(),
            happy_picture: None,
            season_id: Some(season.id),
        },
    )
    .await
    .unwrap();

    assert!(SeasonRepo::delete(&pool, season.id).await.unwrap());

    let host = HostRepo::find_by_id(&pool, host.id).await.unwrap().unwrap();
    assert_eq!(host.season_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_season_nulls_user_reference(pool: PgPool) {
    let season = SeasonRepo::create(
        &pool,
        &CreateSeason {
            name: "Light Summer".to_string(),
            colors: vec![],
        },
    )
    .await
    .unwrap();
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            username: "astrid".to_string(),
            season_id: Some(season.id),
        },
    )
    .await
    .unwrap();

    assert!(SeasonRepo::delete(&pool, season.id).await.unwrap());

    let user = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(user.season_id, None);
}

// ---------------------------------------------------------------------------
// Dangling references
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn hex_color_with_unknown_category_is_rejected(pool: PgPool) {
    let err = HexColorRepo::create(
        &pool,
        &CreateHexColor {
            hex_code: "#123456".to_string(),
            name: "Orphan".to_string(),
            category_id: 999_999,
        },
    )
    .await
    .unwrap_err();
    assert_fk_violation(err);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn season_with_unknown_color_rolls_back(pool: PgPool) {
    let err = SeasonRepo::create(
        &pool,
        &CreateSeason {
            name: "Phantom Season".to_string(),
            colors: vec![999_999],
        },
    )
    .await
    .unwrap_err();
    assert_fk_violation(err);

    // The transaction rolled back: no season row was left behind.
    assert!(SeasonRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn host_with_unknown_season_is_rejected(pool: PgPool) {
    let err = HostRepo::create(
        &pool,
        &CreateHost {
            name: "Lost Host".to_string(),
            picture: "https://example.com/lost.png".to_string(),
            happy_picture: None,
            season_id: Some(999_999),
        },
    )
    .await
    .unwrap_err();
    assert_fk_violation(err);
}
