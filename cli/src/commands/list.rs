use rangr_common::network::adapter;

use crate::rprint;
use crate::terminal::format;

pub fn list() -> anyhow::Result<()> {
    let adapters = adapter::active_adapters()?;
    if adapters.is_empty() {
        anyhow::bail!("no active network adapters found");
    }

    for (idx, adapter) in adapters.iter().enumerate() {
        format::print_adapter(adapter, idx);
        if idx + 1 != adapters.len() {
            rprint!();
        }
    }
    Ok(())
}
