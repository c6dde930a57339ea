use crate::content::PortfolioItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Clothing,
    Branding,
    Advertising,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Clothing, Category::Branding, Category::Advertising];

    pub fn tag(self) -> &'static str {
        match self {
            Category::Clothing => "clothing",
            Category::Branding => "branding",
            Category::Advertising => "advertising",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Clothing => "Clothing",
            Category::Branding => "Branding",
            Category::Advertising => "Advertising",
        }
    }

    /// Name of the service line behind the category, as offered on the
    /// contact form.
    pub fn service_name(self) -> &'static str {
        match self {
            Category::Clothing => "Custom Clothing Printing",
            Category::Branding => "Logo Design & Branding",
            Category::Advertising => "Visual Advertising",
        }
    }
}

/// Which slice of the portfolio is on screen. Starts at `All` and only
/// changes through the filter tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Tab order in the filter bar.
    pub const TABS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Clothing),
        CategoryFilter::Only(Category::Branding),
        CategoryFilter::Only(Category::Advertising),
    ];

    pub fn tag(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.tag(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Projects",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, item: &PortfolioItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == category,
        }
    }

    /// Items passing the filter, in source order.
    pub fn apply(self, items: &[PortfolioItem]) -> Vec<&PortfolioItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;

    #[test]
    fn all_yields_full_list() {
        let shown = CategoryFilter::All.apply(PORTFOLIO);
        assert_eq!(shown.len(), PORTFOLIO.len());
        assert!(shown.iter().zip(PORTFOLIO).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn each_category_yields_exactly_its_items() {
        for category in Category::ALL {
            let shown = CategoryFilter::Only(category).apply(PORTFOLIO);
            let expected: Vec<u32> = PORTFOLIO
                .iter()
                .filter(|item| item.category == category)
                .map(|item| item.id)
                .collect();
            let ids: Vec<u32> = shown.iter().map(|item| item.id).collect();
            assert_eq!(ids, expected, "filter {}", category.tag());
        }
    }

    #[test]
    fn category_counts_match_catalogue() {
        let count = |c| CategoryFilter::Only(c).apply(PORTFOLIO).len();
        assert_eq!(count(Category::Clothing), 3);
        assert_eq!(count(Category::Branding), 2);
        assert_eq!(count(Category::Advertising), 1);
    }

    #[test]
    fn empty_source_stays_empty() {
        assert!(CategoryFilter::Only(Category::Branding).apply(&[]).is_empty());
    }
}
