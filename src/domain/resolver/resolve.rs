use crate::domain::AppError;
use crate::domain::debug_log::DebugLog;
use crate::domain::ids::effective_ids;
use crate::domain::mapping::TermTable;
use crate::domain::slots::{OUTPUT_DELIMITER, join_slots, split_prompts};
use crate::domain::substitute::{fill_placeholder, lookup_name};

use super::request::ResolveRequest;
use super::resolution::{PRIMARY_ID_SEPARATOR, Resolution, SlotResolution};

/// Resolve every prompt slot in `request`.
///
/// Malformed input never fails: bad mapping lines, bad manual IDs and missing
/// IDs degrade to `NOT_FOUND` and are noted in `debug_info`. An error is only
/// returned when an internal length invariant breaks.
pub fn resolve(request: &ResolveRequest) -> Result<Resolution, AppError> {
    let options = &request.options;
    let mut log = DebugLog::new();

    let table = TermTable::parse(&request.term_mappings);
    log.mapping(&table);

    if options.prompt_delimiter.is_empty() {
        log.push("prompt_delimiter is empty; prompt_list kept as a single slot");
    }
    let mut templates = split_prompts(&request.prompt_list, &options.prompt_delimiter);
    let slot_count = templates.len();
    log.push(format!("num_slots={}", slot_count));

    log.push(format!("id_mode={}", options.id_mode));
    for flag in &options.overruled_flags {
        log.push(format!("{} ignored: manual_ids takes precedence", flag));
    }
    log.push(format!(
        "mirror_first_prompt={}; mirror_first_id={}",
        options.mirror_first_prompt, options.mirror_first_id
    ));
    log.push(format!("id_sequences={:?}", request.id_sequences));
    if !request.ignored_id_tokens.is_empty() {
        log.push(format!("id_sequences ignored tokens={:?}", request.ignored_id_tokens));
    }
    if options.placeholder_token.is_empty() {
        log.push("placeholder_token is empty; templates pass through unchanged");
    }
    tracing::debug!(
        mode = options.id_mode.label(),
        slots = slot_count,
        overruled = ?options.overruled_flags,
        "resolving prompt slots"
    );

    if options.mirror_first_prompt {
        if let Some(first) = templates.first().cloned() {
            templates.iter_mut().for_each(|template| *template = first.clone());
        }
    }

    let ids = effective_ids(
        &options.id_mode,
        &request.id_sequences,
        slot_count,
        options.mirror_first_id,
    );
    if ids.len() != slot_count {
        return Err(AppError::invariant(format!(
            "{} prompt slots but {} effective ids",
            slot_count,
            ids.len()
        )));
    }
    log.effective_ids(&ids);

    let slots: Vec<SlotResolution> = templates
        .into_iter()
        .zip(ids)
        .enumerate()
        .map(|(index, (template, id))| {
            let name = lookup_name(&id, &table).to_string();
            let resolved = fill_placeholder(&template, &options.placeholder_token, &name);
            tracing::trace!(index, id = %id, name = %name, "slot resolved");
            log.slot(index, &id, &name, &template, &resolved);
            SlotResolution {
                index,
                id,
                name,
                template,
                resolved,
            }
        })
        .collect();

    let resolved: Vec<&str> = slots.iter().map(|slot| slot.resolved.as_str()).collect();
    let primary: Vec<String> = slots.iter().map(SlotResolution::primary_id_token).collect();

    Ok(Resolution {
        resolved_prompts: join_slots(&resolved, OUTPUT_DELIMITER),
        primary_ids: primary.join(PRIMARY_ID_SEPARATOR),
        debug_info: log.finish(),
        slots,
    })
}
