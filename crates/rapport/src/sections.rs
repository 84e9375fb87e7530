use log::warn;

/// Top-level panels of the presentation, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Constat,
    Indicateurs,
    Solutions,
    Sources,
}

impl SectionId {
    pub const ORDERED: [SectionId; 4] = [
        SectionId::Constat,
        SectionId::Indicateurs,
        SectionId::Solutions,
        SectionId::Sources,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SectionId::Constat => "constat",
            SectionId::Indicateurs => "indicateurs",
            SectionId::Solutions => "solutions",
            SectionId::Sources => "sources",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Constat => "Constat",
            SectionId::Indicateurs => "Indicateurs",
            SectionId::Solutions => "Solutions",
            SectionId::Sources => "Sources",
        }
    }

    pub fn from_id(id: &str) -> Option<SectionId> {
        Self::ORDERED.into_iter().find(|section| section.id() == id)
    }
}

/// Exactly one section is visible at a time. Selecting an unknown id
/// leaves the current section in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionState {
    active: SectionId,
}

impl Default for SectionState {
    fn default() -> Self {
        Self {
            active: SectionId::ORDERED[0],
        }
    }
}

impl SectionState {
    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active == section
    }

    pub fn activate(&mut self, section: SectionId) {
        self.active = section;
    }

    pub fn select(&mut self, id: &str) -> bool {
        match SectionId::from_id(id) {
            Some(section) => {
                self.active = section;
                true
            }
            None => {
                warn!("unknown section id {id:?}, keeping {}", self.active.id());
                false
            }
        }
    }
}
