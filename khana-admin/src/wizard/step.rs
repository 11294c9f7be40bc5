use std::fmt;

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WizardStep {
    Company,
    Categories,
    Products,
    Tables,
    Roles,
    Users,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 7] = [
        WizardStep::Company,
        WizardStep::Categories,
        WizardStep::Products,
        WizardStep::Tables,
        WizardStep::Roles,
        WizardStep::Users,
        WizardStep::Review,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn next(&self) -> Option<WizardStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn prev(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Company => "Company",
            WizardStep::Categories => "Categories",
            WizardStep::Products => "Products",
            WizardStep::Tables => "Tables",
            WizardStep::Roles => "Roles",
            WizardStep::Users => "Users",
            WizardStep::Review => "Review",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
