use crate::config::ConfigLayer;
use crate::constants;
use crate::product::ImageEntry;
use crate::resolve::most_specific;


/// Compose the fully qualified reference for one catalogued image:
/// `registry/[repoPath/]name:tag`.
///
/// Pure per-identifier string composition; resolving one image never reads
/// state belonging to another. `name` and `tag` always come from the product
/// descriptor and are not independently overridable.
pub fn compose_reference(
    entry: &ImageEntry,
    global: &ConfigLayer,
    service: &ConfigLayer,
    image: Option<&ConfigLayer>,
) -> String {
    let registry = most_specific(
        constants::registry::DEFAULT_URL,
        [
            entry.registry.as_deref(),
            global.registry.as_deref(),
            service.registry.as_deref(),
            image.and_then(|layer| layer.registry.as_deref()),
        ],
    );

    // Two levels of optionality: the outer Option is "did this layer set the
    // field at all", the inner value may be explicitly empty. Some("")
    // terminates the chain and suppresses the segment; None defers onward.
    let repo_path = most_specific(
        entry.repo_path.as_deref(),
        [
            global.repo_path.as_deref().map(Some),
            service.repo_path.as_deref().map(Some),
            image.and_then(|layer| layer.repo_path.as_deref()).map(Some),
        ],
    );

    match repo_path {
        Some(path) if !path.is_empty() => {
            format!("{}/{}/{}:{}", registry, path, entry.name, entry.tag)
        }
        _ => format!("{}/{}:{}", registry, entry.name, entry.tag),
    }
}
