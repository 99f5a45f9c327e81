//! Pseudocode lines and named registers

use std::fmt;

/// A pseudocode line of the running algorithm.
///
/// Line `n` highlights row `n` of the algorithm's pseudocode table. Row 0 is the
/// algorithm's header, and [`Line::NONE`] doubles as the start position and the
/// terminal value meaning "execution finished".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Line(u8);

impl Line {
    pub const NONE: Line = Line(0);

    pub const fn new(index: u8) -> Self {
        Line(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_terminal(self) -> bool {
        self == Line::NONE
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_terminal() {
            write!(f, "end")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Named integer registers in insertion order.
///
/// Algorithms keep only a handful of registers, so a flat vector beats a hash
/// map on both lookup and clone cost, and insertion order doubles as display
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    entries: Vec<(&'static str, i32)>,
}

impl Variables {
    pub fn new() -> Self {
        Variables {
            entries: Vec::new(),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, name: &'static str, value: i32) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    pub fn set(&mut self, name: &'static str, value: i32) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| *n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.entries.iter().copied()
    }

    /// Copy out the named registers that are set, in the order given
    pub fn select(&self, names: &[&'static str]) -> Vec<(&'static str, i32)> {
        names
            .iter()
            .filter_map(|&name| self.get(name).map(|v| (name, v)))
            .collect()
    }
}

impl FromIterator<(&'static str, i32)> for Variables {
    fn from_iter<I: IntoIterator<Item = (&'static str, i32)>>(iter: I) -> Self {
        let mut vars = Variables::new();
        for (name, value) in iter {
            vars.set(name, value);
        }
        vars
    }
}

impl fmt::Display for Variables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_in_place() {
        let mut vars = Variables::new().with("i", 0).with("j", 1);
        vars.set("i", 5);
        assert_eq!(vars.iter().collect::<Vec<_>>(), vec![("i", 5), ("j", 1)]);
        assert_eq!(vars.get("k"), None);
    }

    #[test]
    fn select_skips_missing_names() {
        let vars = Variables::new().with("lo", 0).with("hi", 4);
        assert_eq!(vars.select(&["hi", "i", "lo"]), vec![("hi", 4), ("lo", 0)]);
    }

    #[test]
    fn display_lists_registers() {
        let vars: Variables = [("i", 2), ("min", 3)].into_iter().collect();
        assert_eq!(vars.to_string(), "i=2, min=3");
        assert_eq!(Line::NONE.to_string(), "end");
        assert_eq!(Line::new(4).to_string(), "4");
    }
}
