//! HTTP tests for registration, login, lookup, listing and deletion.

#![allow(clippy::panic)]

mod common;

use serde_json::json;

use common::spawn_app;

#[tokio::test]
async fn register_returns_message_and_email() {
    let app = spawn_app().await;
    let (status, body) = app
        .post(
            "/usuarios/registro",
            &json!({ "email": "a@x.com", "password": "pw" }),
        )
        .await;

    assert_eq!(status, 200);
    assert_eq!(body["email"], json!("a@x.com"));
    assert_eq!(body["message"], json!("Usuario registrado exitosamente"));
}

#[tokio::test]
async fn registering_same_email_twice_conflicts() {
    let app = spawn_app().await;
    app.register("a@x.com").await;

    let (status, body) = app
        .post(
            "/usuarios/registro",
            &json!({ "email": "a@x.com", "password": "other" }),
        )
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["detail"], json!("El email ya está registrado"));
}

#[tokio::test]
async fn registration_creates_initial_score() {
    let app = spawn_app().await;
    app.register("a@x.com").await;

    let (status, body) = app.get("/usuarios/a@x.com/puntajes").await;
    assert_eq!(status, 200);
    assert_eq!(body["puntaje_obtenido"], json!(0));
    assert_eq!(body["puntaje_total"], json!(20));
    assert_eq!(body["nivel"], json!("Básico"));

    let (_, health) = app.get("/health").await;
    assert_eq!(health["total_puntajes"], json!(1));
}

#[tokio::test]
async fn login_outcomes() {
    let app = spawn_app().await;
    app.register("a@x.com").await;

    let (ok, body) = app
        .post("/usuarios/login", &json!({ "email": "a@x.com", "password": "pw" }))
        .await;
    assert_eq!(ok, 200);
    assert_eq!(body["message"], json!("Login exitoso"));

    let (wrong, body) = app
        .post("/usuarios/login", &json!({ "email": "a@x.com", "password": "nope" }))
        .await;
    assert_eq!(wrong, 401);
    assert_eq!(body["detail"], json!("Contraseña incorrecta"));

    let (unknown, body) = app
        .post("/usuarios/login", &json!({ "email": "b@x.com", "password": "pw" }))
        .await;
    assert_eq!(unknown, 404);
    assert_eq!(body["detail"], json!("Usuario no encontrado"));
}

#[tokio::test]
async fn list_users_returns_credentials_in_order() {
    let app = spawn_app().await;
    app.register("a@x.com").await;
    app.register("b@x.com").await;

    let (status, body) = app.get("/usuarios").await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!([
            { "email": "a@x.com", "password": "pw" },
            { "email": "b@x.com", "password": "pw" },
        ])
    );
}

#[tokio::test]
async fn get_user_returns_only_email() {
    let app = spawn_app().await;
    app.register("a@x.com").await;

    let (status, body) = app.get("/usuarios/a@x.com").await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "email": "a@x.com" }));

    let (missing, _) = app.get("/usuarios/nobody@x.com").await;
    assert_eq!(missing, 404);
}

#[tokio::test]
async fn delete_user_cascades() {
    let app = spawn_app().await;
    app.register("a@x.com").await;
    app.register("keep@x.com").await;

    let fav = json!({ "clase_id": "c1", "nombre_clase": "Uno", "imagen_path": "/1.png" });
    assert_eq!(app.post("/usuarios/a@x.com/favoritos", &fav).await.0, 200);
    assert_eq!(app.post("/usuarios/keep@x.com/favoritos", &fav).await.0, 200);
    assert_eq!(
        app.post("/usuarios/a@x.com/visitas", &json!({ "clase_id": "c1" })).await.0,
        200
    );

    let (status, body) = app.delete("/usuarios/a@x.com").await;
    assert_eq!(status, 200);
    assert_eq!(
        body["message"],
        json!("Usuario, favoritos, visitas y puntajes eliminados exitosamente")
    );

    assert_eq!(app.get("/usuarios/a@x.com/favoritos").await.0, 404);
    assert_eq!(app.get("/usuarios/a@x.com/visitas").await.0, 404);
    assert_eq!(app.get("/usuarios/a@x.com/puntajes").await.0, 404);
    assert_eq!(app.delete("/usuarios/a@x.com").await.0, 404);

    let (_, health) = app.get("/health").await;
    assert_eq!(health["usuarios_registrados"], json!(1));
    assert_eq!(health["total_favoritos"], json!(1));
    assert_eq!(health["total_visitas"], json!(0));
    assert_eq!(health["total_puntajes"], json!(1));
}
