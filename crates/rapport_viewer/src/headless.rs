use rapport::Presentation;

/// Loads and resolves a report without opening a window, for smoke
/// checks in scripts and CI.
pub fn run_check(location: Option<&str>, fallback_json: &str) -> Result<String, String> {
    let document = match location {
        Some(location) => rapport::load_document(location)
            .map_err(|err| format!("check failed for {location}: {err}"))?,
        None => rapport::load_document_from_str(fallback_json)
            .map_err(|err| format!("embedded report is invalid: {err}"))?,
    };
    let presentation = Presentation::from_document(document);
    Ok(summary_lines(&presentation).join("\n"))
}

/// One line per entity kind, resolved counts (links after dropping the
/// unresolvable ones, sources after dedup).
pub fn summary_lines(presentation: &Presentation) -> Vec<String> {
    let links: usize = presentation
        .paragraphs
        .iter()
        .map(|paragraph| paragraph.links.len())
        .sum();
    vec![
        format!("Titre: {}", presentation.meta.titre),
        format!("Indicateurs: {}", presentation.controller.registry().len()),
        format!("Paragraphes: {}", presentation.paragraphs.len()),
        format!("Liens: {links}"),
        format!("Tuiles: {}", presentation.tiles.len()),
        format!("Sources: {}", presentation.sources.len()),
    ]
}
