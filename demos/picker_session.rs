//! A picker session: the UI layer feeding keystrokes and search text into
//! dialpick-core, the way a phone input control would.

use dialpick_core::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    let db: Arc<Directory> = Directory::shared()?;
    let options = PickerOptions::default().with_favorites(&["RU", "JM", "GB"]);
    let locale = FixedLocale::from_locale_id("en_GB");

    // The input starts with the locale's country.
    let mut input = PhoneInput::for_locale(&db, &locale, &options);
    println!("Start: {}", input.country());

    // The user clears the field and types a Jamaican number.
    let mut text = String::new();
    for ch in "18765550123".chars() {
        text.push(ch);
        let out = input.on_text_changed(&text, db.as_ref());
        if out.country_changed {
            println!("  {:<14} -> {}", out.text, input.country());
        }
        text = out.text;
    }
    println!("Typed: {} ({})", input.raw_phone_number(), input.formatted()?);

    // The user opens the picker and searches.
    let collation = LatinCollation::default();
    let mut index = SearchIndex::with_options(&db, &options, &collation);
    index.select(Some(input.country()));
    if let Some(path) = index.scroll_target() {
        println!("Picker opens at section {} row {}", path.section, path.row);
    }

    index.set_query("land");
    for (i, section) in index.sections().iter().enumerate() {
        if let Some(title) = index.section_title(i) {
            let names: Vec<_> = section.iter().map(|c| c.name()).collect();
            println!("  [{title}] {}", names.join(", "));
        }
    }

    // Picking a country rewrites the text to its dial code.
    let picked = db.lookup_by_code("IS");
    input.select_country(picked);
    println!("Picked {}: text is now {:?}", picked, input.raw_phone_number());

    Ok(())
}
