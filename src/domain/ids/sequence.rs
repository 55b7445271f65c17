use super::{EffectiveId, IdMode};

/// Compute the effective ID for every slot.
///
/// The base sequence comes from `mode`; `mirror_first_id` then copies slot 0's
/// value (sentinel included) onto every slot. The result always has exactly
/// `slot_count` entries.
pub fn effective_ids(
    mode: &IdMode,
    supplied: &[i64],
    slot_count: usize,
    mirror_first_id: bool,
) -> Vec<EffectiveId> {
    let mut ids: Vec<EffectiveId> = (0..slot_count)
        .map(|index| match mode {
            IdMode::Normal => {
                supplied.get(index).copied().map(EffectiveId::Id).unwrap_or(EffectiveId::Unresolved)
            }
            IdMode::AutoStep { base } => auto_step_id(*base, index),
            IdMode::ManualOverride { ids } => {
                ids.get(index).cloned().unwrap_or(EffectiveId::Unresolved)
            }
        })
        .collect();

    if mirror_first_id {
        if let Some(first) = ids.first().cloned() {
            ids.iter_mut().for_each(|id| *id = first.clone());
        }
    }

    ids
}

fn auto_step_id(base: i64, index: usize) -> EffectiveId {
    i64::try_from(index)
        .ok()
        .and_then(|offset| base.checked_add(offset))
        .map(EffectiveId::Id)
        .unwrap_or(EffectiveId::Unresolved)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    use crate::domain::ids::EffectiveId::{Id, Unresolved};

    #[test]
    fn normal_mode_pads_missing_ids_with_unresolved() {
        assert_eq!(
            effective_ids(&IdMode::Normal, &[4, 5], 3, false),
            vec![Id(4), Id(5), Unresolved]
        );
    }

    #[test]
    fn normal_mode_ignores_surplus_ids() {
        assert_eq!(effective_ids(&IdMode::Normal, &[4, 5, 6], 2, false), vec![Id(4), Id(5)]);
    }

    #[test]
    fn auto_step_ignores_supplied_ids() {
        let mode = IdMode::AutoStep { base: 7 };
        assert_eq!(effective_ids(&mode, &[1, 1, 1], 3, false), vec![Id(7), Id(8), Id(9)]);
    }

    #[test]
    fn auto_step_overflow_is_unresolved() {
        let mode = IdMode::AutoStep { base: i64::MAX };
        assert_eq!(effective_ids(&mode, &[], 2, false), vec![Id(i64::MAX), Unresolved]);
    }

    #[test]
    fn manual_override_short_list_leaves_tail_unresolved() {
        let mode = IdMode::ManualOverride {
            ids: vec![Id(1), Id(3)],
        };
        assert_eq!(
            effective_ids(&mode, &[9, 9, 9, 9], 4, false),
            vec![Id(1), Id(3), Unresolved, Unresolved]
        );
    }

    #[test]
    fn mirror_first_id_copies_slot_zero() {
        assert_eq!(effective_ids(&IdMode::Normal, &[2, 5, 8], 3, true), vec![Id(2), Id(2), Id(2)]);
    }

    #[test]
    fn mirror_first_id_copies_a_sentinel_too() {
        let mode = IdMode::ManualOverride {
            ids: vec![EffectiveId::Invalid("x".to_string()), Id(3)],
        };
        let ids = effective_ids(&mode, &[], 2, true);
        assert!(ids.iter().all(|id| *id == EffectiveId::Invalid("x".to_string())));
    }

    #[test]
    fn zero_slots_yield_empty_sequence() {
        assert!(effective_ids(&IdMode::Normal, &[1], 0, true).is_empty());
    }

    proptest! {
        #[test]
        fn auto_step_is_consecutive_from_base(
            base in -1_000_000i64..1_000_000,
            slots in 0usize..64,
        ) {
            let ids = effective_ids(&IdMode::AutoStep { base }, &[], slots, false);
            let expected: Vec<EffectiveId> = (0..slots as i64).map(|i| Id(base + i)).collect();
            prop_assert_eq!(ids, expected);
        }

        #[test]
        fn length_always_matches_slot_count(
            supplied in proptest::collection::vec(any::<i64>(), 0..10),
            slots in 0usize..20,
            mirror in any::<bool>(),
        ) {
            prop_assert_eq!(effective_ids(&IdMode::Normal, &supplied, slots, mirror).len(), slots);
        }
    }
}
