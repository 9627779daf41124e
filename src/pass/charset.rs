//! Character categories and pool assembly.

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Upper,
    Lower,
    Digits,
    Symbols,
}

impl Category {
    /// Pool order. Fixed so a seeded generator gives reproducible output.
    pub const ALL: [Category; 4] = [
        Category::Upper,
        Category::Lower,
        Category::Digits,
        Category::Symbols,
    ];

    pub fn chars(self) -> &'static [u8] {
        match self {
            Category::Upper => UPPERCASE,
            Category::Lower => LOWERCASE,
            Category::Digits => DIGITS,
            Category::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Upper => "Include uppercase",
            Category::Lower => "Include lowercase",
            Category::Digits => "Include numbers",
            Category::Symbols => "Include symbols",
        }
    }
}

/// The four inclusion flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySet {
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CategorySet {
    pub const NONE: CategorySet = CategorySet {
        lower: false,
        upper: false,
        digits: false,
        symbols: false,
    };

    pub fn contains(&self, category: Category) -> bool {
        match category {
            Category::Upper => self.upper,
            Category::Lower => self.lower,
            Category::Digits => self.digits,
            Category::Symbols => self.symbols,
        }
    }

    pub fn with(mut self, category: Category, on: bool) -> Self {
        match category {
            Category::Upper => self.upper = on,
            Category::Lower => self.lower = on,
            Category::Digits => self.digits = on,
            Category::Symbols => self.symbols = on,
        }
        self
    }

    pub fn toggled(self, category: Category) -> Self {
        let on = !self.contains(category);
        self.with(category, on)
    }

    pub fn is_empty(&self) -> bool {
        !(self.lower || self.upper || self.digits || self.symbols)
    }
}

impl Default for CategorySet {
    /// Lowercase only, like a freshly mounted form.
    fn default() -> Self {
        CategorySet {
            lower: true,
            ..CategorySet::NONE
        }
    }
}

/// Concatenate the ranges of every enabled category, uppercase first.
pub fn assemble_pool(set: &CategorySet) -> Vec<u8> {
    let mut pool = Vec::with_capacity(size(set));
    for category in Category::ALL {
        if set.contains(category) {
            pool.extend_from_slice(category.chars());
        }
    }
    pool
}

/// Pool size without building it (for the strength estimate).
pub fn size(set: &CategorySet) -> usize {
    Category::ALL
        .iter()
        .filter(|c| set.contains(**c))
        .map(|c| c.chars().len())
        .sum()
}
