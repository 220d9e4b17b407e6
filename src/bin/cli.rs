//! QuillKV CLI Client
//!
//! Interactive prompt for talking to a QuillKV-compatible server.

use std::io::{self, BufRead, Write};
use std::net::Shutdown;

use clap::Parser;
use quillkv::config::DEFAULT_RECV_BUFFER_SIZE;
use quillkv::protocol::CommandType;
use quillkv::{Config, Connection, Session};
use tracing_subscriber::{fmt, EnvFilter};

/// QuillKV CLI
#[derive(Parser, Debug)]
#[command(name = "quillkv-cli")]
#[command(about = "Interactive client for the QuillKV key-value store")]
#[command(version)]
struct Args {
    /// Server host
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Port number of the server
    #[arg(short, long, default_value = "6379")]
    port: u16,

    /// Bytes read per response (larger replies are truncated)
    #[arg(short, long, default_value_t = DEFAULT_RECV_BUFFER_SIZE)]
    buffer_size: usize,

    /// Response read timeout in milliseconds (0 waits forever)
    #[arg(long, default_value = "0")]
    read_timeout_ms: u64,

    /// Request write timeout in milliseconds (0 waits forever)
    #[arg(long, default_value = "0")]
    write_timeout_ms: u64,

    /// Prompt shown before each command
    #[arg(long, default_value = ">> ")]
    prompt: String,
}

fn main() {
    // Logs go to stderr and stay quiet unless RUST_LOG asks for more
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .host_port(&args.host, args.port)
        .recv_buffer_size(args.buffer_size)
        .read_timeout_ms(args.read_timeout_ms)
        .write_timeout_ms(args.write_timeout_ms)
        .prompt(args.prompt)
        .build();

    let connection = match Connection::connect(&config) {
        Ok(c) => c,
        Err(e) => {
            println!("Error connecting to server at {}: {}", config.server_addr, e);
            std::process::exit(1);
        }
    };

    // Ctrl+C closes the socket and exits cleanly
    match connection.try_clone_stream() {
        Ok(stream) => {
            let installed = ctrlc::set_handler(move || {
                println!("\nClosing connection.");
                let _ = stream.shutdown(Shutdown::Both);
                std::process::exit(0);
            });
            if let Err(e) = installed {
                tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            }
        }
        Err(e) => tracing::warn!("Failed to clone socket for Ctrl+C handling: {}", e),
    }

    println!(
        "Connected to server at {}. Type commands ({}) and press Enter.",
        config.server_addr,
        CommandType::ALL
            .iter()
            .map(|ty| ty.usage())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let mut session = Session::new(connection);
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("{}", config.prompt);
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        }

        if let Some(outcome) = session.handle_line(&line) {
            println!("{}", outcome);
        }
    }

    println!("Closing connection.");
    let stream = session.into_connection().into_inner();
    let _ = stream.shutdown(Shutdown::Both);
}
