// src/cli.rs
use std::env;

use crate::config::state::County;
use crate::parcel::cities::CityLookup;
use crate::parcel::{LookupError, ParcelRecord, Resolver, normalize};

pub struct Params {
    pub parcel: Option<String>,
    pub county: County,
    pub strap_only: Option<String>,
    pub json: bool,
}

impl Params {
    pub fn new() -> Self {
        Self {
            parcel: None,
            county: County::Pinellas,
            strap_only: None,
            json: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    if let Some(id) = params.strap_only {
        println!("{}", normalize::strap(&normalize::normalize(&id)));
        return Ok(());
    }

    let Some(parcel) = params.parcel else {
        return Err("Missing --parcel (see --help)".into());
    };

    if params.county != County::Pinellas {
        return Err(LookupError::UnsupportedCounty.to_string().into());
    }

    let cities = CityLookup::load();
    let record = Resolver::default().resolve(&parcel, &cities)?;

    if params.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&record);
    }
    Ok(())
}

fn print_record(r: &ParcelRecord) {
    println!("Owner:             {}", r.owner);
    println!("Address:           {}", r.address);
    println!("City:              {}", r.city);
    println!("Zip:               {}", r.zip);
    println!("Land use:          {}", r.land_use);
    println!("Legal description: {}", r.legal_description);
    println!("Site area (sf):    {}", r.site_area_sqft);
    println!("Site area (acres): {}", r.site_area_acres);
    println!("Strap:             {}", r.strap);
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-p" | "--parcel" => {
                params.parcel = Some(args.next().ok_or("Missing value for --parcel")?);
            }
            "-c" | "--county" => {
                let v = args.next().ok_or("Missing value for --county")?;
                params.county = County::parse(&v)
                    .ok_or_else(|| format!("Unknown county: {}", v))?;
            }
            "--strap" => {
                params.strap_only = Some(args.next().ok_or("Missing value for --strap")?);
            }
            "--json" => params.json = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
