/// Recursive binary space partition over sibling groups.
///
/// Each group of siblings is divided into two halves of roughly equal total
/// size by a greedy running-sum pass, then the available rectangle is cut
/// along its longer side in proportion to the two totals, leaving a
/// `pad`-wide gutter between the halves. Both halves recurse until a single
/// entry remains, which is placed (and, for a directory, descended into).
use super::rect::PlacedRect;
use crate::config::TreemapConfig;
use crate::model::{Entry, EntryKind};

/// Layout parameters in signed pixel units, plus the output buffer.
pub(crate) struct Splitter {
    pad: i32,
    header: i32,
    min_visible: i32,
    palette_len: usize,
    pub(crate) rects: Vec<PlacedRect>,
}

impl Splitter {
    pub(crate) fn new(config: &TreemapConfig) -> Self {
        Self {
            pad: to_px(config.pad),
            header: to_px(config.header_height()),
            min_visible: to_px(config.min_visible),
            palette_len: config.palette.len(),
            rects: Vec::new(),
        }
    }

    /// Emit `entry` at the given rectangle and lay out its children inside.
    pub(crate) fn place_entry(&mut self, entry: &Entry, x: i32, y: i32, w: i32, h: i32) {
        // Too small to see in both directions.
        if w <= self.min_visible && h <= self.min_visible {
            return;
        }

        self.rects
            .push(PlacedRect::for_entry(entry, x, y, w, h, self.palette_len));

        if let EntryKind::Directory { children } = entry.kind() {
            let group: Vec<&Entry> = children.iter().collect();
            // A frame wider than the rectangle leaves a negative interior,
            // which `split_group` rejects.
            let pad = self.pad;
            self.split_group(
                &group,
                x.saturating_add(pad),
                y.saturating_add(self.header),
                w.saturating_sub(pad.saturating_mul(2)),
                h.saturating_sub(self.header).saturating_sub(pad),
            );
        }
    }

    /// Partition `group` over the rectangle and recurse into both halves.
    fn split_group(&mut self, group: &[&Entry], x: i32, y: i32, w: i32, h: i32) {
        if group.is_empty() || w <= self.min_visible || h <= self.min_visible {
            return;
        }

        if let [only] = group {
            if only.size() > 0 {
                self.place_entry(only, x, y, w, h);
            }
            return;
        }

        let ([first, second], [first_total, second_total]) = partition(group);
        let total = first_total + second_total;
        if total == 0 {
            return;
        }

        let ratio = first_total as f64 / total as f64;
        let dim = w.max(h).saturating_sub(self.pad).max(0);
        let p = (ratio * f64::from(dim)).floor() as i32;
        let r = dim - p;

        // The second half hugs the far edge; the gutter sits between p and w - r.
        if w > h {
            self.split_group(&first, x, y, p, h);
            self.split_group(&second, x + w - r, y, r, h);
        } else {
            self.split_group(&first, x, y, w, p);
            self.split_group(&second, x, y + h - r, w, r);
        }
    }
}

/// Greedy two-way split of a sibling group by running size totals.
///
/// Entries are taken in order and appended to the current side; whenever
/// the current side's total reaches the other's, the other side becomes
/// current. Zero-size entries are dropped.
pub(crate) fn partition<'a>(group: &[&'a Entry]) -> ([Vec<&'a Entry>; 2], [u64; 2]) {
    let mut halves: [Vec<&'a Entry>; 2] = [Vec::new(), Vec::new()];
    let mut totals = [0u64; 2];
    let mut which = 0;

    for &entry in group {
        if entry.size() == 0 {
            continue;
        }
        halves[which].push(entry);
        totals[which] += entry.size();
        if totals[which] >= totals[1 - which] {
            which = 1 - which;
        }
    }

    (halves, totals)
}

fn to_px(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(sizes: &[u64]) -> Vec<Entry> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &s)| Entry::file(format!("f{i}"), s))
            .collect()
    }

    fn sizes(half: &[&Entry]) -> Vec<u64> {
        half.iter().map(|e| e.size()).collect()
    }

    #[test]
    fn test_partition_alternates_on_crossing() {
        let entries = files(&[1, 2, 3, 4]);
        let group: Vec<&Entry> = entries.iter().collect();
        let ([a, b], totals) = partition(&group);
        assert_eq!(sizes(&a), [1, 3]);
        assert_eq!(sizes(&b), [2, 4]);
        assert_eq!(totals, [4, 6]);
    }

    #[test]
    fn test_partition_stays_on_lagging_side() {
        let entries = files(&[5, 1, 1, 1]);
        let group: Vec<&Entry> = entries.iter().collect();
        let ([a, b], totals) = partition(&group);
        assert_eq!(sizes(&a), [5]);
        assert_eq!(sizes(&b), [1, 1, 1]);
        assert_eq!(totals, [5, 3]);
    }

    #[test]
    fn test_partition_drops_zero_sizes() {
        let entries = files(&[0, 10, 0, 30]);
        let group: Vec<&Entry> = entries.iter().collect();
        let ([a, b], totals) = partition(&group);
        assert_eq!(sizes(&a), [10]);
        assert_eq!(sizes(&b), [30]);
        assert_eq!(totals, [10, 30]);
    }

    #[test]
    fn test_partition_all_zero() {
        let entries = files(&[0, 0, 0]);
        let group: Vec<&Entry> = entries.iter().collect();
        let ([a, b], totals) = partition(&group);
        assert!(a.is_empty() && b.is_empty());
        assert_eq!(totals, [0, 0]);
    }

    #[test]
    fn test_huge_pad_never_yields_negative_regions() {
        let config = TreemapConfig {
            pad: 500,
            min_visible: 0,
            ..TreemapConfig::default()
        };
        let entries = files(&[3, 4]);
        let group: Vec<&Entry> = entries.iter().collect();
        let mut splitter = Splitter::new(&config);
        splitter.split_group(&group, 0, 0, 40, 20);
        assert!(splitter.rects.is_empty());
    }
}
