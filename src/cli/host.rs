//! Dedicated host subcommand arguments

use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::config::defaults;

#[derive(Subcommand, Debug)]
pub enum HostCommand {
    /// List dedicated hosts on the account
    List(ListArgs),
    /// List guests provisioned on a dedicated host
    Guests(GuestsArgs),
    /// Show details of a dedicated host
    Detail(DetailArgs),
    /// Order a dedicated host
    Create(CreateArgs),
    /// Show options available for ordering a dedicated host
    CreateOptions(CreateOptionsArgs),
    /// Cancel all guests on a dedicated host
    CancelGuests(CancelGuestsArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by host name
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Filter by datacenter shortname
    #[arg(short = 'd', long)]
    pub datacenter: Option<String>,

    /// Filter by owner (the user who ordered the host)
    #[arg(long)]
    pub owner: Option<String>,

    /// Filter by the id of the order that provisioned the host
    #[arg(long)]
    pub order_id: Option<i64>,

    /// Column to display; repeat the flag for several columns
    #[arg(long)]
    pub column: Vec<String>,

    /// Column to sort by
    #[arg(long, default_value = "id")]
    pub sortby: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
pub struct GuestsArgs {
    /// Dedicated host id
    pub id: i64,

    /// Filter by number of CPU cores
    #[arg(short = 'c', long)]
    pub cpu: Option<i64>,

    /// Filter by memory in megabytes
    #[arg(short = 'm', long)]
    pub memory: Option<i64>,

    /// Filter by hostname (substring match)
    #[arg(short = 'H', long)]
    pub hostname: Option<String>,

    /// Filter by domain (substring match)
    #[arg(short = 'D', long)]
    pub domain: Option<String>,

    /// Filter by tag; repeat the flag for several tags
    #[arg(long)]
    pub tag: Vec<String>,

    /// Column to display; repeat the flag for several columns
    #[arg(long)]
    pub column: Vec<String>,

    /// Column to sort by
    #[arg(long, default_value = "hostname")]
    pub sortby: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
pub struct DetailArgs {
    /// Dedicated host id
    pub id: i64,

    /// Include the recurring price breakdown
    #[arg(long)]
    pub price: bool,

    /// Include the guests provisioned on the host
    #[arg(long)]
    pub guests: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Host portion of the fully qualified domain name
    #[arg(short = 'H', long)]
    pub hostname: String,

    /// Domain portion of the fully qualified domain name
    #[arg(short = 'D', long)]
    pub domain: String,

    /// Datacenter shortname
    #[arg(short = 'd', long)]
    pub datacenter: String,

    /// Id of the private VLAN the host will serve
    #[arg(short = 'v', long)]
    pub vlan_private: i64,

    /// Host size key name
    #[arg(short = 's', long, default_value = defaults::HOST_SIZE)]
    pub size: String,

    /// Billing rate (hourly or monthly)
    #[arg(short = 'b', long, default_value = defaults::BILLING)]
    pub billing: String,

    /// Verify the order without placing it
    #[arg(long)]
    pub test: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
pub struct CreateOptionsArgs {
    /// Show private VLANs available in this datacenter (requires --flavor)
    #[arg(short = 'd', long)]
    pub datacenter: Option<String>,

    /// Host size key name to check VLAN availability for (requires --datacenter)
    #[arg(short = 'f', long)]
    pub flavor: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
pub struct CancelGuestsArgs {
    /// Dedicated host id
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
