//! Line-level differences between two pages
//!
//! Computes a minimal edit script from the longest common subsequence of
//! the two line lists and keeps only the edits. Inside a changed region
//! removals come before additions, so a replaced block reads as its old
//! lines followed by its new lines.
//!
//! The LCS table holds `(n + 1) * (m + 1)` `u32` cells for the `n` and `m`
//! lines left after trimming the shared head and tail. Pages that differ
//! in a few places stay cheap; two unrelated 5000-line pages need about
//! 100 MB.

use shared_types::DiffLine;

/// Added and removed lines turning `old` into `new`, in edit-script order
pub fn diff_lines(old: &[String], new: &[String]) -> Vec<DiffLine> {
    let (old, new) = trim_common(old, new);
    let table = LcsTable::build(old, new);
    let mut differences = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < old.len() && j < new.len() {
        if old[i] == new[j] {
            i += 1;
            j += 1;
        } else if table.get(i + 1, j) >= table.get(i, j + 1) {
            differences.push(DiffLine::removed(old[i].as_str()));
            i += 1;
        } else {
            differences.push(DiffLine::added(new[j].as_str()));
            j += 1;
        }
    }

    differences.extend(old[i..].iter().map(|line| DiffLine::removed(line.as_str())));
    differences.extend(new[j..].iter().map(|line| DiffLine::added(line.as_str())));
    differences
}

/// Drop the shared head and tail, which never produce edits
fn trim_common<'a>(old: &'a [String], new: &'a [String]) -> (&'a [String], &'a [String]) {
    let prefix = old
        .iter()
        .zip(new)
        .take_while(|(a, b)| a == b)
        .count();
    let (old, new) = (&old[prefix..], &new[prefix..]);

    let suffix = old
        .iter()
        .rev()
        .zip(new.iter().rev())
        .take_while(|(a, b)| a == b)
        .count();
    (&old[..old.len() - suffix], &new[..new.len() - suffix])
}

/// Suffix LCS lengths: `get(i, j)` is the LCS of `old[i..]` and `new[j..]`
struct LcsTable {
    width: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    fn build(old: &[String], new: &[String]) -> Self {
        let width = new.len() + 1;
        let mut cells = vec![0u32; (old.len() + 1) * width];

        for i in (0..old.len()).rev() {
            for j in (0..new.len()).rev() {
                cells[i * width + j] = if old[i] == new[j] {
                    cells[(i + 1) * width + j + 1] + 1
                } else {
                    cells[(i + 1) * width + j].max(cells[i * width + j + 1])
                };
            }
        }

        Self { width, cells }
    }

    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.width + j]
    }
}
