//! Scan a small reclist, edit a record and write the list back.
//!
//! Run with: cargo run --example solar_system

use reclist::{record, Scanner, Writer};
use std::error::Error;

const SOLAR: &str = r#"
# Solar system objects
@star=Sun
	radius:	109.3
	mass:	333000
	descrip: "The Sun is the star at the center
		of the Solar System."

@planet=Mars
	radius: 0.5320
	mass:	0.107
	descrip: "Mars is often referred as
		the \"Red Planet\".

		It has two small moons."

@moon=Titan
	parent: Saturn
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::new(std::io::stdout().lock());

    for record in Scanner::from_str(SOLAR) {
        let mut record = record?;
        eprintln!("# {} {} ({} fields)", record.kind(), record.id(), record.len());
        if record.id() == "Mars" {
            record.set("moons", "Phobos Deimos");
        }
        writer.write_record(&record)?;
    }

    let eris = record!("dwarf", "Eris", { "family" => "SDO" }).ok_or("invalid record")?;
    writer.write_record(&eris)?;
    writer.flush()?;

    eprintln!("✓ {} records written", writer.records_written());
    Ok(())
}
