//! Basic usage of dialpick-core
//!
//! Loads the bundled directory and shows the lookups and the normalizer.

use dialpick_core::prelude::*;

fn main() -> Result<()> {
    println!("=== dialpick basic usage ===\n");

    let db = Directory::load()?;
    let stats = db.stats();
    println!(
        "Loaded {} countries ({} dial prefixes, {} shared)\n",
        stats.countries, stats.dial_prefixes, stats.shared_prefixes
    );

    println!("--- Lookup by code ---");
    for code in ["ru", "JM", "zz"] {
        let c = db.lookup_by_code(code);
        if c.is_unknown() {
            println!("  {code}: unknown");
        } else {
            println!("  {code}: {c}");
        }
    }
    println!();

    println!("--- Lookup by dial prefix ---");
    for prefix in ["+7", "44", "+1"] {
        let holders: Vec<_> = db
            .find_all_by_dial_prefix(prefix)
            .iter()
            .map(|c| c.code())
            .collect();
        println!(
            "  {prefix}: {} (shared by: {})",
            db.lookup_by_dial_prefix(prefix).code(),
            holders.join(", ")
        );
    }
    println!();

    println!("--- Normalizing ---");
    let input = PhoneInput::new(db.lookup_by_code("RU"), true).with_text("+7 999 777 33 44");
    println!("  raw:                  {}", input.raw_phone_number());
    println!("  phone number:         {}", input.phone_number());
    println!("  without country code: {}", input.phone_number_without_country_code()?);
    println!("  formatted:            {}", input.formatted()?);

    let mortal = PhoneInput::new(db.lookup_by_code("RU"), false).with_text("+7 999");
    if let Err(e) = mortal.phone_number_without_country_code() {
        println!("  with a deletable '+': {e}");
    }

    Ok(())
}
