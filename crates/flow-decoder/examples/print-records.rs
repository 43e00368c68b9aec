// Copyright (C) 2025-present The NetGauze Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Listen for NetFlow/IPFIX packets on UDP and print every decoded record as
//! JSON.

use netgauze_flow_decoder::checker::spawn_template_checker;
use netgauze_flow_decoder::config::DecoderConfig;
use netgauze_flow_decoder::record::Record;
use netgauze_flow_decoder::FlowDecoder;
use tokio::net::UdpSocket;
use tracing::info;

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    init_tracing();
    let config = DecoderConfig::default();
    let interval = config.template_check_interval;
    let (tx, rx) = async_channel::bounded::<Record>(1000);
    let decoder = FlowDecoder::new(config, tx);
    let (checker_join, checker) = spawn_template_checker(decoder.clone(), interval);

    tokio::spawn(async move {
        while let Ok(record) = rx.recv().await {
            match serde_json::to_string(&record) {
                Ok(json) => println!("{json}"),
                Err(err) => tracing::error!("Error serializing record: {err}"),
            }
        }
    });

    let listen_addr = "0.0.0.0:9995";
    let socket = UdpSocket::bind(&listen_addr).await?;
    info!("Listening on addr: {listen_addr}");
    let mut buf = vec![0u8; 65535];
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl-C, exiting");
                break;
            }
            next = socket.recv_from(&mut buf) => {
                let (len, addr) = next?;
                let emitted = decoder.decode(&buf[..len], &addr.ip().to_string());
                info!(exporter = %addr, emitted, "decoded packet");
            }
        }
    }
    checker.shutdown().await?;
    let summary = checker_join.await?;
    info!(
        replayed = summary.replayed_sets,
        expired = summary.expired_sets,
        "template checker stopped"
    );
    Ok(())
}
