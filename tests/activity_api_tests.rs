//! HTTP tests for favorites, visits and scores.

#![allow(clippy::panic)]

mod common;

use serde_json::json;

use common::spawn_app;

fn favorite(class_id: &str, name: &str) -> serde_json::Value {
    json!({
        "clase_id": class_id,
        "nombre_clase": name,
        "imagen_path": format!("/img/{class_id}.png"),
    })
}

#[tokio::test]
async fn adding_same_favorite_twice_conflicts_and_counts_once() {
    let app = spawn_app().await;
    app.register("a@x.com").await;

    let (first, body) = app
        .post("/usuarios/a@x.com/favoritos", &favorite("c1", "Álgebra"))
        .await;
    assert_eq!(first, 200);
    assert_eq!(body["message"], json!("Favorito agregado exitosamente"));
    assert_eq!(body["favorito"], favorite("c1", "Álgebra"));

    let (second, body) = app
        .post("/usuarios/a@x.com/favoritos", &favorite("c1", "Álgebra"))
        .await;
    assert_eq!(second, 400);
    assert_eq!(body["detail"], json!("La clase ya está en favoritos"));

    let (_, list) = app.get("/usuarios/a@x.com/favoritos").await;
    assert_eq!(list["total"], json!(1));
    assert_eq!(list["email"], json!("a@x.com"));
}

#[tokio::test]
async fn favorite_for_unknown_user_is_not_found() {
    let app = spawn_app().await;
    let (status, body) = app
        .post("/usuarios/ghost@x.com/favoritos", &favorite("c1", "X"))
        .await;
    assert_eq!(status, 404);
    assert_eq!(body["detail"], json!("Usuario no encontrado"));
}

#[tokio::test]
async fn update_and_remove_favorite() {
    let app = spawn_app().await;
    app.register("a@x.com").await;
    assert_eq!(
        app.post("/usuarios/a@x.com/favoritos", &favorite("c1", "Uno")).await.0,
        200
    );

    let (status, body) = app
        .put("/usuarios/a@x.com/favoritos/c1", &favorite("c2", "Dos"))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], json!("Favorito actualizado exitosamente"));

    let (_, list) = app.get("/usuarios/a@x.com/favoritos").await;
    assert_eq!(list["favoritos"], json!([favorite("c2", "Dos")]));

    let (missing, body) = app
        .put("/usuarios/a@x.com/favoritos/c1", &favorite("c3", "Tres"))
        .await;
    assert_eq!(missing, 404);
    assert_eq!(body["detail"], json!("Favorito no encontrado"));

    let (removed, body) = app.delete("/usuarios/a@x.com/favoritos/c2").await;
    assert_eq!(removed, 200);
    assert_eq!(body["message"], json!("Favorito removido exitosamente"));

    assert_eq!(app.delete("/usuarios/a@x.com/favoritos/c2").await.0, 404);

    let (_, list) = app.get("/usuarios/a@x.com/favoritos").await;
    assert_eq!(list["total"], json!(0));
}

#[tokio::test]
async fn update_favorite_onto_existing_class_is_rejected() {
    let app = spawn_app().await;
    app.register("a@x.com").await;
    for (class_id, name) in [("c1", "Uno"), ("c2", "Dos")] {
        assert_eq!(
            app.post("/usuarios/a@x.com/favoritos", &favorite(class_id, name))
                .await
                .0,
            200
        );
    }

    let (status, body) = app
        .put("/usuarios/a@x.com/favoritos/c1", &favorite("c2", "Otro"))
        .await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({"detail": "La clase ya está en favoritos"}));

    let (_, list) = app.get("/usuarios/a@x.com/favoritos").await;
    assert_eq!(
        list["favoritos"],
        json!([favorite("c1", "Uno"), favorite("c2", "Dos")])
    );
}

#[tokio::test]
async fn visits_increment_and_sum() {
    let app = spawn_app().await;
    app.register("a@x.com").await;

    for class_id in ["c1", "c1", "c2"] {
        let (status, body) = app
            .post("/usuarios/a@x.com/visitas", &json!({ "clase_id": class_id }))
            .await;
        assert_eq!(status, 200);
        assert_eq!(body["message"], json!("Visita registrada exitosamente"));
    }

    let (status, body) = app.get("/usuarios/a@x.com/visitas").await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "email": "a@x.com",
            "visitas": [
                { "clase_id": "c1", "count": 2 },
                { "clase_id": "c2", "count": 1 },
            ],
            "total_visitas": 3,
        })
    );
}

#[tokio::test]
async fn score_is_replaced_only_by_strictly_better() {
    let app = spawn_app().await;
    app.register("a@x.com").await;
    let path = "/usuarios/a@x.com/puntajes";

    let (_, first) = app
        .post(path, &json!({ "puntaje_obtenido": 10, "puntaje_total": 20, "nivel": "Basico" }))
        .await;
    assert_eq!(first["data"]["is_new_best"], json!(true));

    let (status, second) = app
        .post(path, &json!({ "puntaje_obtenido": 12, "puntaje_total": 20, "nivel": "Intermedio" }))
        .await;
    assert_eq!(status, 200);
    assert_eq!(
        second,
        json!({
            "message": "Puntaje procesado exitosamente",
            "data": {
                "is_new_best": true,
                "puntaje_obtenido": 12,
                "puntaje_total": 20,
                "nivel": "Intermedio",
            },
        })
    );

    let (_, third) = app
        .post(path, &json!({ "puntaje_obtenido": 11, "puntaje_total": 20, "nivel": "X" }))
        .await;
    assert_eq!(third["data"]["is_new_best"], json!(false));
    assert_eq!(third["data"]["puntaje_obtenido"], json!(11));
    assert_eq!(third["data"]["nivel"], json!("X"));

    let (_, stored) = app.get(path).await;
    assert_eq!(
        stored,
        json!({
            "email": "a@x.com",
            "puntaje_obtenido": 12,
            "puntaje_total": 20,
            "nivel": "Intermedio",
        })
    );
}

#[tokio::test]
async fn zero_total_score_is_rejected() {
    let app = spawn_app().await;
    app.register("a@x.com").await;
    let path = "/usuarios/a@x.com/puntajes";

    let (status, body) = app
        .post(path, &json!({ "puntaje_obtenido": 5, "puntaje_total": 0, "nivel": "X" }))
        .await;
    assert_eq!(status, 422);
    assert!(body["detail"].is_string());

    let (_, stored) = app.get(path).await;
    assert_eq!(stored["puntaje_total"], json!(20));
}

#[tokio::test]
async fn score_for_unknown_user_is_not_found() {
    let app = spawn_app().await;
    assert_eq!(app.get("/usuarios/ghost@x.com/puntajes").await.0, 404);
    let (status, _) = app
        .post(
            "/usuarios/ghost@x.com/puntajes",
            &json!({ "puntaje_obtenido": 1, "puntaje_total": 2, "nivel": "X" }),
        )
        .await;
    assert_eq!(status, 404);
}
