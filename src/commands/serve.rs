//! Web interface command.
//!
//! Loads the configuration and the task document, then serves the tracker
//! until interrupted. The store is read exactly once here; afterwards the
//! in-memory collection is authoritative and every mutation rewrites the
//! document.

use crate::libs::{config::Config, messages::Message, uploads::Uploads};
use crate::store::tasks::TaskStore;
use crate::web::{self, AppState};
use crate::{msg_error_anyhow, msg_info};
use anyhow::Result;
use clap::Args;
use std::net::SocketAddr;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the configured port
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the configured host
    #[arg(long)]
    host: Option<String>,
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    let mut server = Config::read()?.server();
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }

    let store = TaskStore::open()?;
    msg_info!(Message::StoreLoaded(store.len()));

    let bind = format!("{}:{}", server.host, server.port);
    let addr: SocketAddr = bind.parse().map_err(|_| msg_error_anyhow!(Message::InvalidBindAddress(bind.clone())))?;

    let state = AppState::new(store, Uploads::new()?);
    msg_info!(Message::ServerStarted(addr.to_string()));
    web::start_server(addr, state).await
}
