use anyhow::Context;
use rangr_common::network::adapter;
use rangr_core::os;

use crate::terminal::{format, print, prompt};

pub fn show(name: Option<&str>) -> anyhow::Result<()> {
    let adapters = adapter::active_adapters()?;
    if adapters.is_empty() {
        anyhow::bail!("no active network adapters found");
    }

    let adapter = match name {
        Some(name) => adapters
            .iter()
            .find(|a| a.name == name || a.display_name() == name)
            .with_context(|| format!("no active adapter named '{name}'"))?
            .clone(),
        None => prompt::select_adapter(&adapters)?,
    };

    let driver = os::system()?;
    let state = driver.current(&adapter)?;

    print::tree_head(adapter.index as usize, adapter.display_name());
    print::as_tree_one_level(format::state_to_pairs(&state));
    Ok(())
}
