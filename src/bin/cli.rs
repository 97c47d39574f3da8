//! keactl CLI Client
//!
//! Command-line interface for a Kea control agent.

use clap::{Args as ClapArgs, Parser, Subcommand};
use keactl::{Client, ClientConfig, Reservation, Result};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

/// keactl CLI
#[derive(Parser, Debug)]
#[command(name = "keactl")]
#[command(about = "CLI for the Kea DHCP control agent")]
#[command(version)]
struct Args {
    /// Control agent host
    #[arg(short = 'H', long, env = "KEA_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Control agent port
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// URL scheme (http or https)
    #[arg(long, default_value = "http")]
    scheme: String,

    /// Request timeout in milliseconds
    #[arg(long, default_value = "10000")]
    timeout_ms: u64,

    /// Basic auth username
    #[arg(short, long, env = "KEA_USERNAME")]
    username: Option<String>,

    /// Basic auth password
    #[arg(long, env = "KEA_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Config backend type for subnet commands (e.g. mysql)
    #[arg(long)]
    remote_type: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Host reservations
    #[command(subcommand)]
    Reservation(ReservationCommand),

    /// Config backend subnets
    #[command(subcommand)]
    Subnet(SubnetCommand),

    /// List supported commands
    Commands {
        /// Target service (agent when omitted)
        #[arg(short, long)]
        service: Option<String>,
    },

    /// Show the server version
    Version {
        /// Target service (agent when omitted)
        #[arg(short, long)]
        service: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum ReservationCommand {
    /// List all reservations of a subnet
    List {
        #[arg(short, long)]
        subnet: u32,
    },

    /// Get a reservation by IP or MAC
    Get {
        /// IP address or hardware address
        ip_or_mac: String,

        #[arg(short, long)]
        subnet: u32,
    },

    /// Add a reservation
    Add(ReservationArgs),

    /// Update a reservation
    Update(ReservationArgs),

    /// Delete a reservation by IP
    Del {
        ip: String,

        #[arg(short, long)]
        subnet: u32,
    },
}

#[derive(ClapArgs, Debug)]
struct ReservationArgs {
    #[arg(long)]
    ip: String,

    #[arg(long)]
    mac: String,

    #[arg(long, default_value = "")]
    hostname: String,

    #[arg(short, long)]
    subnet: u32,
}

#[derive(Subcommand, Debug)]
enum SubnetCommand {
    /// List subnets
    List,

    /// Get a subnet by id
    Get { id: u32 },

    /// Delete a subnet by id
    Del { id: u32 },
}

impl From<ReservationArgs> for Reservation {
    fn from(args: ReservationArgs) -> Self {
        Reservation {
            ip_address: args.ip,
            hw_address: args.mac,
            hostname: args.hostname,
            subnet_id: args.subnet,
            ..Default::default()
        }
    }
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,keactl=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = ClientConfig::builder()
        .scheme(&args.scheme)
        .port(args.port)
        .timeout_ms(args.timeout_ms);

    if let Some(username) = &args.username {
        builder = builder.auth(username, args.password.clone().unwrap_or_default());
    }
    if let Some(kind) = &args.remote_type {
        builder = builder.remote_type(kind);
    }

    let client = match Client::new(builder.build()) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to create client: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&client, &args.host, args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(client: &Client, host: &str, command: Commands) -> Result<()> {
    match command {
        Commands::Reservation(cmd) => match cmd {
            ReservationCommand::List { subnet } => print(&client.reservation_get_all(host, subnet)?),
            ReservationCommand::Get { ip_or_mac, subnet } => {
                match client.reservation_get(host, &ip_or_mac, subnet)? {
                    Some(reservation) => print(&reservation),
                    None => {
                        tracing::info!("No reservation for {} in subnet {}", ip_or_mac, subnet);
                        Ok(())
                    }
                }
            }
            ReservationCommand::Add(res) => client.reservation_add(host, res.into()),
            ReservationCommand::Update(res) => client.reservation_update(host, res.into()),
            ReservationCommand::Del { ip, subnet } => client.reservation_del(host, &ip, subnet),
        },
        Commands::Subnet(cmd) => match cmd {
            SubnetCommand::List => print(&client.remote_subnet4_list(host)?),
            SubnetCommand::Get { id } => match client.remote_subnet4_get_by_id(host, id)? {
                Some(subnet) => print(&subnet),
                None => {
                    tracing::info!("No subnet with id {}", id);
                    Ok(())
                }
            },
            SubnetCommand::Del { id } => client.remote_subnet4_del_by_id(host, id),
        },
        Commands::Commands { service } => print(&client.list_commands(host, service.as_deref())?),
        Commands::Version { service } => {
            println!("{}", client.version_get(host, service.as_deref())?);
            Ok(())
        }
    }
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
