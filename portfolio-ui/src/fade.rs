use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// Fraction of an element that must be visible before it fades in.
pub const VISIBLE_THRESHOLD: f64 = 0.1;

/// Class added to an element once it has scrolled into view.
pub const IN_VIEW_CLASS: &str = "in-view";

/// One intersection report for an observed element.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry<K> {
    pub target: K,
    pub is_intersecting: bool,
    /// Visible fraction of the element, 0.0 to 1.0
    pub intersection_ratio: f64,
}

impl<K> IntersectionEntry<K> {
    pub fn new(target: K, is_intersecting: bool, intersection_ratio: f64) -> Self {
        Self {
            target,
            is_intersecting,
            intersection_ratio,
        }
    }
}

/// One-shot fade-in: the first qualifying report for an element marks it
/// in view and stops observing it. The class is never removed.
#[derive(Debug, Clone)]
pub struct FadeInObserver<K> {
    threshold: f64,
    observed: HashSet<K>,
    in_view: HashSet<K>,
}

impl<K> Default for FadeInObserver<K>
where
    K: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new(VISIBLE_THRESHOLD)
    }
}

impl<K> FadeInObserver<K>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            observed: HashSet::new(),
            in_view: HashSet::new(),
        }
    }

    /// Start observing `target`. Elements already in view stay unobserved.
    pub fn observe(&mut self, target: K) {
        if !self.in_view.contains(&target) {
            self.observed.insert(target);
        }
    }

    pub fn unobserve(&mut self, target: &K) {
        self.observed.remove(target);
    }

    /// Apply a batch of intersection reports, returning the elements that
    /// newly gained [`IN_VIEW_CLASS`], in report order.
    pub fn on_intersection<I>(&mut self, entries: I) -> Vec<K>
    where
        I: IntoIterator<Item = IntersectionEntry<K>>,
    {
        let mut revealed = Vec::new();
        for entry in entries {
            if !self.observed.contains(&entry.target) {
                continue;
            }
            if entry.is_intersecting && entry.intersection_ratio >= self.threshold {
                debug!("{:?} scrolled into view", entry.target);
                self.unobserve(&entry.target);
                self.in_view.insert(entry.target.clone());
                revealed.push(entry.target);
            }
        }
        revealed
    }

    pub fn is_observed(&self, target: &K) -> bool {
        self.observed.contains(target)
    }

    pub fn is_in_view(&self, target: &K) -> bool {
        self.in_view.contains(target)
    }

    /// Classes the controller contributes to `target`
    pub fn classes(&self, target: &K) -> &'static [&'static str] {
        if self.is_in_view(target) {
            &[IN_VIEW_CLASS]
        } else {
            &[]
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observer(ids: &[&'static str]) -> FadeInObserver<&'static str> {
        let mut observer = FadeInObserver::default();
        for id in ids {
            observer.observe(*id);
        }
        observer
    }

    #[test]
    fn test_default_threshold() {
        let observer: FadeInObserver<u32> = FadeInObserver::default();
        assert_eq!(observer.threshold(), 0.1);
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut observer = observer(&["project-1"]);

        let revealed = observer.on_intersection([IntersectionEntry::new("project-1", true, 0.05)]);

        assert!(revealed.is_empty());
        assert!(observer.is_observed(&"project-1"));
        assert!(observer.classes(&"project-1").is_empty());
    }

    #[test]
    fn test_crossing_threshold_reveals_and_unobserves() {
        let mut observer = observer(&["project-1", "project-2"]);

        let revealed = observer.on_intersection([
            IntersectionEntry::new("project-1", true, 0.1),
            IntersectionEntry::new("project-2", false, 0.0),
        ]);

        assert_eq!(revealed, vec!["project-1"]);
        assert!(!observer.is_observed(&"project-1"));
        assert!(observer.is_observed(&"project-2"));
        assert_eq!(observer.classes(&"project-1"), &[IN_VIEW_CLASS]);
    }

    #[test]
    fn test_reveal_happens_once() {
        let mut observer = observer(&["project-1"]);

        observer.on_intersection([IntersectionEntry::new("project-1", true, 0.5)]);
        let again = observer.on_intersection([
            IntersectionEntry::new("project-1", false, 0.0),
            IntersectionEntry::new("project-1", true, 1.0),
        ]);

        assert!(again.is_empty());
        assert!(observer.is_in_view(&"project-1"));
    }

    #[test]
    fn test_unobserved_elements_are_ignored() {
        let mut observer = observer(&[]);

        let revealed = observer.on_intersection([IntersectionEntry::new("stray", true, 1.0)]);

        assert!(revealed.is_empty());
        assert!(!observer.is_in_view(&"stray"));
    }

    #[test]
    fn test_observing_revealed_element_is_noop() {
        let mut observer = observer(&["project-1"]);
        observer.on_intersection([IntersectionEntry::new("project-1", true, 0.3)]);

        observer.observe("project-1");

        assert!(!observer.is_observed(&"project-1"));
    }
}
