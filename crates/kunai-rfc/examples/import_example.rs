//! Example showing a bulk import: split, parse, name and re-serialize cards.
//!
//! Run with: `cargo run --package kunai-rfc --example import_example`

use kunai_rfc::rfc::vcard::{PropertyName, import, serialize};

const BLOB: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
UID:jane-1\r\n\
FN:Jane Doe\r\n\
N:Doe;Jane;;\r\n\
TEL;TYPE=cell:+1 555 0100\r\n\
END:VCARD\r\n\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:Broken Address\r\n\
ADR;TYPE=home\r\n\
END:VCARD\r\n\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
UID:team/lab 2\r\n\
FN:Lab Team\r\n\
KIND:group\r\n\
MEMBER:urn:uuid:jane-1\r\n\
END:VCARD\r\n";

fn main() {
    println!("=== vCard import ===\n");

    let outcome = import(BLOB);
    println!(
        "{} cards found, {} parsed, {} rejected\n",
        outcome.total(),
        outcome.records.len(),
        outcome.rejected.len()
    );

    for record in &outcome.records {
        let name = record.formatted_name().unwrap_or("(no FN)");
        let target = record
            .resource_name()
            .unwrap_or_else(|| "(no UID)".to_string());
        println!("{name} -> {target}");

        for tel in record.get(&PropertyName::Tel) {
            println!("  TEL {}", tel.field("number").unwrap_or_default());
        }
    }

    for rejected in &outcome.rejected {
        println!("\nCard {} rejected: {}", rejected.index, rejected.error);
    }

    println!("\n=== Re-serialized ===\n");
    for record in &outcome.records {
        print!("{}", serialize(record));
    }
}
