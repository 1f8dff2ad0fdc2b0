//! Document geometry of the page's scroll-anchored sections.
//!
//! Sections keep navigation order. Lookups scan in that order so the first
//! section containing the focus point wins even if measured ranges overlap.

/// One scroll-anchored region of the page, in document coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Anchor id, without the leading `#`
    pub id: String,
    /// Position in the navigation list (tie-break order)
    pub order: usize,
    /// Top edge (px from document top)
    pub top: f64,
    /// Height (px)
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, order: usize, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            order,
            top,
            height,
        }
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// True if `y` lies in `[top, top + height)`
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Ordered section geometry for one page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionLayout {
    sections: Vec<Section>,
}

impl SectionLayout {
    /// Build from explicit geometry. `order` is reassigned from the slice position.
    pub fn new(sections: Vec<Section>) -> Self {
        let sections = sections
            .into_iter()
            .enumerate()
            .map(|(order, section)| Section { order, ..section })
            .collect();
        Self { sections }
    }

    /// Measure sections for `ids` using `measure(id) -> Some((top, height))`.
    ///
    /// Ids whose element cannot be measured are left out, the same way a
    /// missing anchor element never becomes active.
    pub fn measure<'a, I, F>(ids: I, mut measure: F) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut(&str) -> Option<(f64, f64)>,
    {
        let sections = ids
            .into_iter()
            .enumerate()
            .filter_map(|(order, id)| {
                let (top, height) = measure(id)?;
                Some(Section::new(id, order, top, height))
            })
            .collect();
        Self { sections }
    }

    /// Refresh geometry after a layout change. Sections that can no longer be
    /// measured collapse to zero height so they never match.
    pub fn remeasure<F>(&mut self, mut measure: F)
    where
        F: FnMut(&str) -> Option<(f64, f64)>,
    {
        for section in &mut self.sections {
            let (top, height) = measure(&section.id).unwrap_or((section.top, 0.0));
            section.top = top;
            section.height = height;
        }
    }

    /// First section (in navigation order) containing `y`.
    pub fn section_at(&self, y: f64) -> Option<&Section> {
        self.sections.iter().find(|s| s.contains(y))
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn first(&self) -> Option<&Section> {
        self.sections.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total document height covered by the sections.
    pub fn total_height(&self) -> f64 {
        self.sections
            .iter()
            .map(Section::bottom)
            .fold(0.0, f64::max)
    }
}
