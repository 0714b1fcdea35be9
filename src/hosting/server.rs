use super::*;
use crate::ID;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;

pub struct Server;

impl Server {
    pub async fn run(config: LobbyConfig, bind: String) -> anyhow::Result<()> {
        let lobby = Arc::new(Lobby::new(config));
        let switchboard = Arc::new(Switchboard::default());
        Sweeper::spawn(lobby.clone(), switchboard.clone());
        let lobby = web::Data::from(lobby);
        let switchboard = web::Data::from(switchboard);
        log::info!("starting mancala server on {}", bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(lobby.clone())
                .app_data(switchboard.clone())
                .route("/health", web::get().to(health))
                .route("/ws", web::get().to(enter))
        })
        .workers(4)
        .bind(bind.as_str())
        .inspect_err(|e| log::error!("failed to bind {}: {}", bind, e))?
        .run()
        .await
        .map_err(anyhow::Error::from)
    }

    /// Pumps one socket until either side hangs up.
    /// Outbound lines come from the participant's switchboard line;
    /// inbound text goes through the [`Client`] in arrival order.
    async fn bridge(
        client: Client,
        switchboard: Arc<Switchboard>,
        mut session: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
    ) {
        use futures::StreamExt;
        let id = client.id();
        let mut rx = switchboard.connect(id).await;
        log::info!("participant {} connected", id);
        'sesh: loop {
            tokio::select! {
                biased;
                msg = rx.recv() => match msg {
                    Some(json) => if session.text(json).await.is_err() { break 'sesh },
                    None => break 'sesh,
                },
                msg = stream.next() => match msg {
                    Some(Ok(actix_ws::Message::Text(text))) => client.handle(&text).await,
                    Some(Ok(actix_ws::Message::Ping(bytes))) => if session.pong(&bytes).await.is_err() { break 'sesh },
                    Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                    Some(Err(_)) => break 'sesh,
                    None => break 'sesh,
                    _ => continue 'sesh,
                },
            }
        }
        client.close().await;
        switchboard.hangup(id).await;
        let _ = session.close(None).await;
        log::info!("participant {} disconnected", id);
    }
}

async fn health(lobby: web::Data<Lobby>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "sessions": lobby.len().await,
    }))
}

async fn enter(
    lobby: web::Data<Lobby>,
    switchboard: web::Data<Switchboard>,
    body: web::Payload,
    req: HttpRequest,
) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            let switchboard = switchboard.into_inner();
            let client = Client::new(ID::default(), lobby.into_inner(), switchboard.clone());
            actix_web::rt::spawn(Server::bridge(client, switchboard, session, stream));
            response.map_into_left_body()
        }
        Err(e) => HttpResponse::InternalServerError()
            .body(e.to_string())
            .map_into_right_body(),
    }
}
