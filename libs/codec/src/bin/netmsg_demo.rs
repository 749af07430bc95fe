//! Message API walkthrough
//!
//! Usage:
//!   netmsg-demo
//!   netmsg-demo --config config/codec.toml --log-level debug
//!
//! Builds a message, pushes a few plain values, runs it through the codec the
//! way a transport would, then pops the values back in reverse order.

use anyhow::{Context, Result};
use clap::Parser;
use netmsg_codec::{CodecConfig, MessageCodec};
use netmsg_types::{Message, Pod, Zeroable};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "netmsg-demo")]
#[command(about = "Push/pop walkthrough for netmsg typed messages")]
#[command(version)]
struct Args {
    /// Path to a codec configuration file (TOML)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
enum CustomMsgTypes {
    FireBullet,
    MovePlayer,
}

impl Default for CustomMsgTypes {
    fn default() -> Self {
        CustomMsgTypes::FireBullet
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
struct Point {
    x: f32,
    y: f32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = match &args.config {
        Some(path) => CodecConfig::from_file(path).map_err(|e| {
            error!("Failed to load configuration: {:#}", e);
            e
        })?,
        None => CodecConfig::default(),
    }
    .with_env_overrides()?;
    info!(max_message_size = config.max_message_size, "codec configured");
    let codec = MessageCodec::new(config);

    let mut msg = Message::<CustomMsgTypes>::new();
    msg.set_id(CustomMsgTypes::FireBullet);

    let a = 1i32;
    let b = true;
    let c = 3.5f32;
    let mut d = [Point::zeroed(); 5];
    for (i, point) in d.iter_mut().enumerate() {
        point.x = i as f32;
        point.y = i as f32 * 2.0;
    }

    msg.push(&a).push(&b).push(&c).push(&d);
    info!("built {}", msg);

    let bytes = codec.encode(&msg).context("encoding demo message")?;
    debug!(wire = %hex::encode(&bytes), "encoded {} bytes", bytes.len());

    let mut received = codec
        .decode::<CustomMsgTypes>(&bytes)
        .context("decoding demo message")?;
    info!("received {}", received);

    let mut out_a = 99i32;
    let mut out_b = false;
    let mut out_c = 100.01f32;
    let mut out_d = [Point::zeroed(); 5];

    received
        .pop_into(&mut out_d)?
        .pop_into(&mut out_c)?
        .pop_into(&mut out_b)?
        .pop_into(&mut out_a)?;

    info!(a = out_a, b = out_b, c = out_c, "popped scalars");
    info!("popped points: {:?}", out_d);
    info!("drained {}", received);

    if (out_a, out_b, out_d) != (a, b, d) || out_c.to_bits() != c.to_bits() {
        anyhow::bail!("values changed across the round trip");
    }

    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
