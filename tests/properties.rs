use std::time::Duration;

use portfolio_site::content::AchievementCategory;
use portfolio_site::filter::{filter_by_category, Categorized, Category, CategoryFilter, Selection};
use portfolio_site::reveal::StaggeredReveal;
use portfolio_site::site::TypingTimings;
use portfolio_site::typewriter::{Phase, Typewriter};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    position: usize,
    category: AchievementCategory,
}

impl Categorized for Entry {
    type Category = AchievementCategory;

    fn category(&self) -> AchievementCategory {
        self.category
    }
}

fn registry() -> impl Strategy<Value = Vec<Entry>> {
    proptest::collection::vec(0..AchievementCategory::ALL.len(), 0..40).prop_map(|picks| {
        picks
            .into_iter()
            .enumerate()
            .map(|(position, pick)| Entry {
                position,
                category: AchievementCategory::ALL[pick],
            })
            .collect()
    })
}

/// A registry together with one of the selections it offers.
fn registry_and_selection() -> impl Strategy<Value = (Vec<Entry>, Selection<AchievementCategory>)> {
    registry().prop_flat_map(|entries| {
        let offered = CategoryFilter::of(&entries).selections();
        (Just(entries), proptest::sample::select(offered))
    })
}

proptest! {
    #[test]
    fn test_filtering_is_idempotent((entries, selection) in registry_and_selection()) {
        let once: Vec<&Entry> = CategoryFilter::of(&entries).visible(selection).collect();
        let twice: Vec<&Entry> =
            filter_by_category(once.iter().copied(), selection, Entry::category).collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_filtering_is_stable((entries, selection) in registry_and_selection()) {
        let visible: Vec<&Entry> = CategoryFilter::of(&entries).visible(selection).collect();
        prop_assert!(visible.windows(2).all(|w| w[0].position < w[1].position));
        prop_assert!(visible.iter().all(|e| selection.matches(e.category)));
        let expected = entries.iter().filter(|e| selection.matches(e.category)).count();
        prop_assert_eq!(visible.len(), expected);
    }

    #[test]
    fn test_all_is_identity(entries in registry()) {
        let visible: Vec<Entry> = CategoryFilter::of(&entries)
            .visible(Selection::All)
            .cloned()
            .collect();
        prop_assert_eq!(visible, entries);
    }

    #[test]
    fn test_typing_cycle_advances_one_role(
        roles in proptest::collection::vec("[a-zé✓ ]{1,12}", 1..5),
        start in 0usize..5,
    ) {
        let mut tw = Typewriter::new(roles.clone(), TypingTimings::default());
        // move to the start role
        for _ in 0..start % roles.len() {
            let len = roles[tw.role_index()].chars().count();
            for _ in 0..2 * len + 1 {
                tw.tick();
            }
        }
        let index = tw.role_index();
        prop_assert_eq!(index, start % roles.len());

        let len = roles[index].chars().count();
        for _ in 0..len {
            prop_assert_eq!(tw.phase(), Phase::Typing);
            tw.tick();
        }
        prop_assert_eq!(tw.text(), roles[index].as_str());
        prop_assert_eq!(tw.phase(), Phase::Pausing);
        tw.tick();
        for _ in 0..len {
            prop_assert_eq!(tw.phase(), Phase::Deleting);
            tw.tick();
        }
        prop_assert_eq!(tw.text(), "");
        prop_assert_eq!(tw.phase(), Phase::Typing);
        prop_assert_eq!(tw.role_index(), (index + 1) % roles.len());
    }

    #[test]
    fn test_reveal_completes_after_last_interval(len in 0usize..30, interval_ms in 1u64..500) {
        let interval = Duration::from_millis(interval_ms);
        let mut reveal = StaggeredReveal::new(len, interval);
        reveal.visible_after(Duration::from_secs(3600));
        prop_assert!((0..len).all(|i| !reveal.is_visible(i)));

        let schedule = reveal.trigger();
        prop_assert_eq!(schedule.len(), len);
        let last = interval * len.saturating_sub(1) as u32;
        prop_assert!(schedule.iter().all(|(_, delay)| *delay <= last));
        reveal.visible_after(last);
        prop_assert!(reveal.all_visible());
    }
}
