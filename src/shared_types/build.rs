use anyhow::Result;
use connect_status_core::{
    events::{ConnectionEvent, ExportEvent, FormEvent},
    types::{ConnectionOutcome, ConnectionState, InputRow, StatusClass, TickerState},
    App,
};
use crux_core::typegen::TypeGen;
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Domain event enums, so every variant is traced
    gen.register_type::<ConnectionEvent>()?;
    gen.register_type::<ExportEvent>()?;
    gen.register_type::<FormEvent>()?;

    // Session state enums
    gen.register_type::<ConnectionOutcome>()?;
    gen.register_type::<ConnectionState>()?;
    gen.register_type::<StatusClass>()?;
    gen.register_type::<TickerState>()?;

    gen.register_type::<InputRow>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
