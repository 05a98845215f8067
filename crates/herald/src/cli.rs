use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use herald_core::{Error, ManifestFormat, Priority, Result, WiringManifest};

/// Load and validate a wiring manifest, reporting its size.
pub fn run_check(path: &Path) -> Result<String> {
    let manifest = load_manifest(path)?;
    manifest.validate()?;
    Ok(format!("manifest OK: {} binding(s)", manifest.bindings.len()))
}

/// List a manifest's bindings per event, in dispatch order.
///
/// Explicit priorities come first, ascending; auto-assigned bindings
/// follow in declaration order, which is the order the registry would
/// number them in.
pub fn run_events(path: &Path) -> Result<String> {
    let manifest = load_manifest(path)?;
    manifest.validate()?;

    let mut events: Vec<&str> = manifest
        .bindings
        .iter()
        .map(|binding| binding.event.as_str())
        .collect();
    events.sort_unstable();
    events.dedup();

    let mut out = String::new();
    for event in events {
        let _ = writeln!(out, "{}", event);

        let mut explicit: Vec<(Priority, &str)> = manifest
            .bindings
            .iter()
            .filter(|binding| binding.event == event)
            .filter_map(|binding| {
                binding
                    .priority
                    .map(|priority| (priority, binding.handler.as_str()))
            })
            .collect();
        explicit.sort_unstable_by_key(|(priority, _)| *priority);
        for (priority, handler) in explicit {
            let _ = writeln!(out, "  {:>6}  {}", priority, handler);
        }

        for binding in manifest
            .bindings
            .iter()
            .filter(|binding| binding.event == event && binding.priority.is_none())
        {
            let _ = writeln!(out, "  {:>6}  {}", "auto", binding.handler);
        }
    }
    Ok(out)
}

fn load_manifest(path: &Path) -> Result<WiringManifest> {
    let format = ManifestFormat::from_path(path).ok_or_else(|| {
        Error::Other(format!(
            "unrecognized manifest extension: {}",
            path.display()
        ))
    })?;
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Other(format!("failed to read '{}': {}", path.display(), e)))?;
    Ok(WiringManifest::parse(&content, format)?)
}
