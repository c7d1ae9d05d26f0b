use core::fmt::Write;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use wirefield::{Packed, ip, tcp, udp};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    /// An IPv4 header.
    Ipv4,
    /// A TCP header.
    Tcp,
    /// A TCP header with the RFC 793 control bits.
    Tcp793,
    /// A UDP header.
    Udp,
}

#[derive(Parser)]
struct Opts {
    /// The kind of header to build.
    #[clap(value_enum)]
    kind: Kind,
    /// Fields to set, in the form `name=value`.
    ///
    /// Values may be given in decimal, or in hex with a `0x` prefix.
    #[clap(long = "set", short = 's')]
    set: Vec<String>,
    /// List the fields of the header and exit.
    #[clap(long)]
    fields: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let opts = Opts::try_parse()?;

    match opts.kind {
        Kind::Ipv4 => dump::<ip::v4::Header>(&opts),
        Kind::Tcp => dump::<tcp::Header>(&opts),
        Kind::Tcp793 => dump::<tcp::Rfc793Header>(&opts),
        Kind::Udp => dump::<udp::Header>(&opts),
    }
}

fn dump<H>(opts: &Opts) -> Result<()>
where
    H: Packed + Default + core::fmt::Debug,
{
    if opts.fields {
        for field in H::FIELDS {
            println!(
                "{:<20} word {} offset {:>2} width {:>2}",
                field.name(),
                field.word(),
                field.offset(),
                field.width()
            );
        }

        return Ok(());
    }

    let mut header = H::default();

    for assignment in &opts.set {
        let (name, value) = assignment
            .split_once('=')
            .with_context(|| format!("{assignment}: expected `name=value`"))?;

        let field = H::field(name).with_context(|| format!("{name}: no such field in {}", H::NAME))?;
        let value = parse(value).with_context(|| format!("{name}: bad value `{value}`"))?;

        header.set(field, value).with_context(|| name.to_owned())?;
    }

    println!("{header:#?}");
    println!("{}", hex(header.as_bytes()));
    Ok(())
}

fn parse(value: &str) -> Result<u32> {
    let value = match value.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16)?,
        None => value.parse()?,
    };

    Ok(value)
}

fn hex(bytes: &[u8]) -> String {
    let mut out = String::new();

    for (n, b) in bytes.iter().enumerate() {
        if n > 0 {
            out.push(' ');
        }

        _ = write!(out, "{b:02X}");
    }

    out
}
