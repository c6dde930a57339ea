use crate::models::portfolio::Category;

/// Anchored sections of the page, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Services,
    Features,
    Portfolio,
    Testimonials,
    Contact,
}

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Features => "features",
            Section::Portfolio => "portfolio",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }
}

pub struct NavLink {
    pub name: &'static str,
    pub target: Section,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", target: Section::Home },
    NavLink { name: "Services", target: Section::Services },
    NavLink { name: "Why Us", target: Section::Features },
    NavLink { name: "Portfolio", target: Section::Portfolio },
    NavLink { name: "Testimonials", target: Section::Testimonials },
    NavLink { name: "Contact", target: Section::Contact },
];

pub const BRAND_NAME: &str = "PrintMaster";

pub struct Service {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub examples: [&'static str; 4],
    pub image: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: 1,
        title: "Custom Clothing Printing",
        description: "High-quality printing on t-shirts, hoodies, caps, and more. Perfect for businesses, events, teams, or personal use.",
        icon: "fas fa-shirt",
        examples: ["T-shirts", "Hoodies", "Caps", "Uniforms"],
        image: "https://images.pexels.com/photos/5699163/pexels-photo-5699163.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Service {
        id: 2,
        title: "Logo Design & Branding",
        description: "Create a memorable brand identity with our professional logo design services. We help establish your visual brand presence.",
        icon: "fas fa-palette",
        examples: ["Logo Design", "Brand Identity", "Style Guides", "Business Cards"],
        image: "https://images.pexels.com/photos/6224/hands-people-woman-working.jpg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Service {
        id: 3,
        title: "Visual Advertising",
        description: "Eye-catching promotional materials to boost your marketing efforts. From flyers to vehicle wraps, we make you stand out.",
        icon: "fas fa-file-image",
        examples: ["Flyers", "Banners", "Posters", "Vehicle Wraps"],
        image: "https://images.pexels.com/photos/6802042/pexels-photo-6802042.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
];

pub struct Feature {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        id: 1,
        title: "Fast Turnaround",
        description: "We deliver your projects quickly without compromising on quality. Our efficient workflow ensures you meet your deadlines.",
        icon: "fas fa-clock",
    },
    Feature {
        id: 2,
        title: "Premium Quality",
        description: "We use top-grade materials and cutting-edge printing technology to ensure vibrant colors and long-lasting results.",
        icon: "fas fa-award",
    },
    Feature {
        id: 3,
        title: "Custom Design Service",
        description: "Our professional designers help bring your ideas to life or create something amazing from scratch just for you.",
        icon: "fas fa-palette",
    },
    Feature {
        id: 4,
        title: "24/7 Customer Support",
        description: "We're always available to answer your questions and address concerns at any stage of your project.",
        icon: "fas fa-headset",
    },
];

#[derive(Debug, PartialEq)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub image: &'static str,
    pub description: &'static str,
}

pub const PORTFOLIO: &[PortfolioItem] = &[
    PortfolioItem {
        id: 1,
        title: "Team Jersey Collection",
        category: Category::Clothing,
        image: "https://images.pexels.com/photos/5699456/pexels-photo-5699456.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        description: "Custom printed jerseys for local sports teams with vibrant colors and durable prints.",
    },
    PortfolioItem {
        id: 2,
        title: "Modern Brand Identity",
        category: Category::Branding,
        image: "https://images.pexels.com/photos/6802049/pexels-photo-6802049.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        description: "Complete brand identity package including logo, typography, and color palette.",
    },
    PortfolioItem {
        id: 3,
        title: "Festival Merchandise",
        category: Category::Clothing,
        image: "https://images.pexels.com/photos/5699426/pexels-photo-5699426.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        description: "Limited edition t-shirts and hoodies designed for a music festival.",
    },
    PortfolioItem {
        id: 4,
        title: "Corporate Event Banners",
        category: Category::Advertising,
        image: "https://images.pexels.com/photos/7256883/pexels-photo-7256883.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        description: "Large format banners and promotional materials for a corporate conference.",
    },
    PortfolioItem {
        id: 5,
        title: "Streetwear Collection",
        category: Category::Clothing,
        image: "https://images.pexels.com/photos/5698845/pexels-photo-5698845.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        description: "Urban-inspired custom printed apparel for a local fashion brand.",
    },
    PortfolioItem {
        id: 6,
        title: "Restaurant Rebrand",
        category: Category::Branding,
        image: "https://images.pexels.com/photos/4064797/pexels-photo-4064797.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        description: "Complete visual identity update for an established restaurant chain.",
    },
];

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub image: &'static str,
    pub content: &'static str,
    /// Stars out of five.
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Sarah Johnson",
        role: "Marketing Director",
        company: "TechStart Inc.",
        image: "https://images.pexels.com/photos/2690323/pexels-photo-2690323.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        content: "PrintMaster delivered exceptional quality for our company's branded merchandise. The team was responsive, creative, and met our tight deadline. Our employees and clients love the custom t-shirts and promotional materials!",
        rating: 5,
    },
    Testimonial {
        id: 2,
        name: "Michael Rodriguez",
        role: "Event Coordinator",
        company: "Urban Festival",
        image: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        content: "We needed hundreds of custom t-shirts, banners, and flyers for our annual music festival, and PrintMaster exceeded our expectations. The vibrant colors and durable prints were exactly what we wanted.",
        rating: 5,
    },
    Testimonial {
        id: 3,
        name: "Jennifer Lee",
        role: "Owner",
        company: "Bright Bean Café",
        image: "https://images.pexels.com/photos/1181686/pexels-photo-1181686.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        content: "Our café needed a complete rebrand, and PrintMaster handled everything from logo design to printed menus and staff uniforms. The cohesive look has really elevated our brand image and customers have noticed!",
        rating: 4,
    },
    Testimonial {
        id: 4,
        name: "David Wilson",
        role: "Coach",
        company: "Westfield Hawks",
        image: "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        content: "The custom jerseys PrintMaster created for our basketball team are outstanding. The quality is top-notch, the designs are eye-catching, and they've held up well throughout the season. Highly recommend!",
        rating: 5,
    },
];

pub struct ContactDetail {
    pub icon: &'static str,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail { icon: "fas fa-phone", title: "Phone", lines: &["(123) 456-7890"] },
    ContactDetail { icon: "fas fa-envelope", title: "Email", lines: &["info@printmaster.example"] },
    ContactDetail {
        icon: "fas fa-location-dot",
        title: "Office",
        lines: &["123 Print Avenue, Suite 101", "Design District, CA 90210"],
    },
];

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "fab fa-facebook-f"),
    ("Instagram", "fab fa-instagram"),
    ("Twitter", "fab fa-twitter"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_cover_every_section_once() {
        let targets: Vec<Section> = NAV_LINKS.iter().map(|link| link.target).collect();
        assert_eq!(
            targets,
            vec![
                Section::Home,
                Section::Services,
                Section::Features,
                Section::Portfolio,
                Section::Testimonials,
                Section::Contact,
            ]
        );
        assert_eq!(Section::Features.anchor(), "#features");
    }

    #[test]
    fn ratings_fit_five_star_row() {
        assert_eq!(TESTIMONIALS.len(), 4);
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }
}
