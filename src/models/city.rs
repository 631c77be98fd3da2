use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Validate raw prompt input. Matching ignores case only.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.to_lowercase();
        City::ALL
            .iter()
            .copied()
            .find(|city| city.name() == normalized)
    }

    /// Name as typed at the prompt
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Key used in configuration files and environment overrides
    pub fn config_key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new_york_city",
            City::Washington => "washington",
        }
    }

    pub fn default_file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
