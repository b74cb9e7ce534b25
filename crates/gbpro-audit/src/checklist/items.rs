use super::ChecklistCategory::{
    BasicInfo, Contact, Content, Engagement, Reviews, Seo, Technical, Visual,
};
use super::Weight::{Critical, Important, NiceToHave};
use super::{ChecklistCategory, Rule, Weight};

pub const ITEM_COUNT: usize = 47;

/// Static definition of one check.
pub(super) struct ItemDef {
    pub id: &'static str,
    pub category: ChecklistCategory,
    pub label: &'static str,
    pub rule: Rule,
    pub weight: Weight,
    pub fix_guide: &'static str,
    pub estimated_time: &'static str,
}

const UNKNOWN: Rule = Rule::Undeterminable { assumed: false };
const ASSUMED_OK: Rule = Rule::Undeterminable { assumed: true };

// Several rules are proxies for what the listing cannot show directly:
// ct-4 (holiday hours) uses regular hours, vs-5/vs-6 (cover, logo) use photo
// count, tc-3/tc-4 (mobile, speed) use website presence.
pub(super) static DEFINITIONS: [ItemDef; ITEM_COUNT] = [
    // Basic information
    ItemDef {
        id: "bi-1",
        category: BasicInfo,
        label: "Business name is set",
        rule: Rule::NameSet,
        weight: Critical,
        fix_guide: "Go to your GBP dashboard → Info → Edit business name. Use your real business name without keywords stuffing.",
        estimated_time: "2 min",
    },
    ItemDef {
        id: "bi-2",
        category: BasicInfo,
        label: "Business name matches real signage",
        rule: Rule::NameShorterThan(80),
        weight: Critical,
        fix_guide: "Ensure your GBP name exactly matches your storefront sign. Adding extra keywords can get you suspended.",
        estimated_time: "2 min",
    },
    ItemDef {
        id: "bi-3",
        category: BasicInfo,
        label: "Complete address is set",
        rule: Rule::AddressLongerThan(10),
        weight: Critical,
        fix_guide: "Go to Info → Address. Enter your full address including building number, street, city, state, and PIN code.",
        estimated_time: "3 min",
    },
    ItemDef {
        id: "bi-4",
        category: BasicInfo,
        label: "Primary category is selected",
        rule: Rule::CategoriesMoreThan(0),
        weight: Critical,
        fix_guide: "Go to Info → Category. Choose the most specific category that describes your main business activity.",
        estimated_time: "2 min",
    },
    ItemDef {
        id: "bi-5",
        category: BasicInfo,
        label: "Additional categories added",
        rule: Rule::CategoriesMoreThan(2),
        weight: Important,
        fix_guide: "Add 2-3 additional categories that describe your secondary services. E.g., a restaurant might add 'Catering service' and 'Takeout restaurant'.",
        estimated_time: "3 min",
    },
    ItemDef {
        id: "bi-6",
        category: BasicInfo,
        label: "Business description is filled",
        rule: Rule::DescriptionLongerThan(20),
        weight: Important,
        fix_guide: "Go to Info → Description. Write a 750-character description including your services, specialties, and location-specific keywords.",
        estimated_time: "10 min",
    },
    ItemDef {
        id: "bi-7",
        category: BasicInfo,
        label: "Business is marked as operational",
        rule: Rule::Operational,
        weight: Critical,
        fix_guide: "If your business shows as temporarily closed or permanently closed, go to Info → Status and update it to 'Open'.",
        estimated_time: "2 min",
    },
    // Contact
    ItemDef {
        id: "ct-1",
        category: Contact,
        label: "Phone number is added",
        rule: Rule::PhoneSet,
        weight: Critical,
        fix_guide: "Go to Info → Phone. Add your primary business phone number. Use a local number for better local SEO.",
        estimated_time: "2 min",
    },
    ItemDef {
        id: "ct-2",
        category: Contact,
        label: "Website URL is set",
        rule: Rule::WebsiteSet,
        weight: Important,
        fix_guide: "Go to Info → Website. Add your website URL. If you don't have a website, Google offers a free basic one.",
        estimated_time: "2 min",
    },
    ItemDef {
        id: "ct-3",
        category: Contact,
        label: "Business hours are set",
        rule: Rule::HoursSet,
        weight: Critical,
        fix_guide: "Go to Info → Hours. Set your regular business hours for each day. Include special hours for holidays.",
        estimated_time: "5 min",
    },
    ItemDef {
        id: "ct-4",
        category: Contact,
        label: "Holiday hours are configured",
        rule: Rule::HoursSet,
        weight: NiceToHave,
        fix_guide: "Go to Info → Special Hours. Add hours for upcoming public holidays so customers know when you're open.",
        estimated_time: "5 min",
    },
    ItemDef {
        id: "ct-5",
        category: Contact,
        label: "Appointment/booking link added",
        rule: UNKNOWN,
        weight: NiceToHave,
        fix_guide: "If applicable, go to Info → Appointment URL. Add a link to your booking system (Calendly, Zoho, etc.).",
        estimated_time: "3 min",
    },
    // Visual
    ItemDef {
        id: "vs-1",
        category: Visual,
        label: "Has at least 1 photo",
        rule: Rule::PhotosAtLeast(1),
        weight: Critical,
        fix_guide: "Upload at least one high-quality photo of your business exterior from the GBP dashboard → Photos.",
        estimated_time: "5 min",
    },
    ItemDef {
        id: "vs-2",
        category: Visual,
        label: "Has 5+ photos",
        rule: Rule::PhotosAtLeast(5),
        weight: Important,
        fix_guide: "Add photos of: exterior, interior, team, products/services. Aim for variety so customers know what to expect.",
        estimated_time: "10 min",
    },
    ItemDef {
        id: "vs-3",
        category: Visual,
        label: "Has 10+ photos",
        rule: Rule::PhotosAtLeast(10),
        weight: Important,
        fix_guide: "Listings with 10+ photos get 35% more clicks. Add menu items, happy customers (with permission), and events.",
        estimated_time: "15 min",
    },
    ItemDef {
        id: "vs-4",
        category: Visual,
        label: "Has 20+ photos (ideal)",
        rule: Rule::PhotosAtLeast(20),
        weight: NiceToHave,
        fix_guide: "The best-performing listings have 20+ photos. Add seasonal content, behind-the-scenes, and team photos.",
        estimated_time: "20 min",
    },
    ItemDef {
        id: "vs-5",
        category: Visual,
        label: "Cover photo is set",
        rule: Rule::PhotosAtLeast(1),
        weight: Critical,
        fix_guide: "Go to Photos → Cover photo. Choose a high-quality, well-lit image that represents your business. Ideal size: 1080x608px.",
        estimated_time: "5 min",
    },
    ItemDef {
        id: "vs-6",
        category: Visual,
        label: "Logo is uploaded",
        rule: Rule::PhotosAtLeast(2),
        weight: Important,
        fix_guide: "Go to Photos → Logo. Upload a square logo (250x250px minimum). This appears in search results and Maps.",
        estimated_time: "3 min",
    },
    // Posts and content: none observable without the business-profile API
    ItemDef {
        id: "cn-1",
        category: Content,
        label: "Has posted in the last 7 days",
        rule: UNKNOWN,
        weight: Important,
        fix_guide: "Create a GBP post now! Share an update, offer, or event. Active profiles rank higher in local search.",
        estimated_time: "10 min",
    },
    ItemDef {
        id: "cn-2",
        category: Content,
        label: "Posts at least weekly",
        rule: UNKNOWN,
        weight: Critical,
        fix_guide: "Schedule weekly posts using GBP Pro. Include photos, CTAs, and relevant keywords in every post.",
        estimated_time: "15 min/week",
    },
    ItemDef {
        id: "cn-3",
        category: Content,
        label: "Uses different post types",
        rule: UNKNOWN,
        weight: NiceToHave,
        fix_guide: "Mix your post types: Updates, Offers, Events, and Products. Variety signals an active business to Google.",
        estimated_time: "5 min",
    },
    ItemDef {
        id: "cn-4",
        category: Content,
        label: "Posts include images",
        rule: UNKNOWN,
        weight: Important,
        fix_guide: "Always attach a photo to your posts. Posts with images get 10x more engagement than text-only posts.",
        estimated_time: "5 min",
    },
    ItemDef {
        id: "cn-5",
        category: Content,
        label: "Posts include call-to-action",
        rule: UNKNOWN,
        weight: Important,
        fix_guide: "Add a CTA button (Learn more, Call now, Book, Order) to every post to drive customer actions.",
        estimated_time: "2 min",
    },
    ItemDef {
        id: "cn-6",
        category: Content,
        label: "Products/services listed",
        rule: UNKNOWN,
        weight: Important,
        fix_guide: "Go to Products/Services in your GBP dashboard. Add your key offerings with descriptions and prices.",
        estimated_time: "15 min",
    },
    // Reviews
    ItemDef {
        id: "rv-1",
        category: Reviews,
        label: "Has at least 1 review",
        rule: Rule::ReviewsAtLeast(1),
        weight: Critical,
        fix_guide: "Ask your best customers to leave a review. Share your Google review link via WhatsApp, email, or on receipts.",
        estimated_time: "5 min",
    },
    ItemDef {
        id: "rv-2",
        category: Reviews,
        label: "Has 10+ reviews",
        rule: Rule::ReviewsAtLeast(10),
        weight: Important,
        fix_guide: "Aim for 10+ reviews. Place a review request QR code at your counter, and follow up with customers after service.",
        estimated_time: "Ongoing",
    },
    ItemDef {
        id: "rv-3",
        category: Reviews,
        label: "Has 50+ reviews",
        rule: Rule::ReviewsAtLeast(50),
        weight: NiceToHave,
        fix_guide: "50+ reviews builds strong trust. Automate review requests via SMS/WhatsApp after each transaction.",
        estimated_time: "Ongoing",
    },
    ItemDef {
        id: "rv-4",
        category: Reviews,
        label: "Average rating is 4.0+",
        rule: Rule::RatingAtLeast(4.0),
        weight: Critical,
        fix_guide: "Focus on customer satisfaction. Address negative reviews promptly and professionally. Ask happy customers to review.",
        estimated_time: "Ongoing",
    },
    ItemDef {
        id: "rv-5",
        category: Reviews,
        label: "Average rating is 4.5+",
        rule: Rule::RatingAtLeast(4.5),
        weight: Important,
        fix_guide: "4.5+ rating is the gold standard. Identify patterns in negative reviews and fix root causes in operations.",
        estimated_time: "Ongoing",
    },
    // Engagement: reply and messaging data is not exposed by places search
    ItemDef {
        id: "en-1",
        category: Engagement,
        label: "Responds to reviews",
        rule: UNKNOWN,
        weight: Critical,
        fix_guide: "Respond to every review within 24 hours. Use GBP Pro's AI to generate professional responses instantly.",
        estimated_time: "5 min/review",
    },
    ItemDef {
        id: "en-2",
        category: Engagement,
        label: "Responds within 24 hours",
        rule: UNKNOWN,
        weight: Important,
        fix_guide: "Set up GBP Pro alerts. Quick responses show Google and customers that you care about feedback.",
        estimated_time: "Setup: 5 min",
    },
    ItemDef {
        id: "en-3",
        category: Engagement,
        label: "Answers customer questions (Q&A)",
        rule: UNKNOWN,
        weight: Important,
        fix_guide: "Check your GBP Q&A section regularly. Pre-populate common questions and answers proactively.",
        estimated_time: "10 min",
    },
    ItemDef {
        id: "en-4",
        category: Engagement,
        label: "Messaging is enabled",
        rule: UNKNOWN,
        weight: NiceToHave,
        fix_guide: "Enable messaging in your GBP settings. This lets customers message you directly from your listing.",
        estimated_time: "3 min",
    },
    ItemDef {
        id: "en-5",
        category: Engagement,
        label: "Uses Google Business messages",
        rule: UNKNOWN,
        weight: NiceToHave,
        fix_guide: "Actively respond to messages within a few hours. Set up auto-replies for after-hours inquiries.",
        estimated_time: "5 min",
    },
    // SEO
    ItemDef {
        id: "se-1",
        category: Seo,
        label: "Description contains relevant keywords",
        rule: Rule::DescriptionLongerThan(50),
        weight: Critical,
        fix_guide: "Rewrite your description to naturally include your main services and location. E.g., 'Best biryani restaurant in Koramangala, Bangalore'.",
        estimated_time: "10 min",
    },
    ItemDef {
        id: "se-2",
        category: Seo,
        label: "Category matches main service",
        rule: Rule::CategoriesMoreThan(0),
        weight: Critical,
        fix_guide: "Ensure your primary category is the most specific one available. 'Indian restaurant' is better than just 'Restaurant'.",
        estimated_time: "3 min",
    },
    ItemDef {
        id: "se-3",
        category: Seo,
        label: "Location keywords in posts",
        rule: UNKNOWN,
        weight: Important,
        fix_guide: "Include your city/area name in GBP posts. E.g., 'Visit our new outlet in Indiranagar, Bangalore!'",
        estimated_time: "2 min/post",
    },
    ItemDef {
        id: "se-4",
        category: Seo,
        label: "Service area is defined",
        rule: Rule::AddressSet,
        weight: Important,
        fix_guide: "If you serve customers beyond your location, go to Info → Service area and add the areas you cover.",
        estimated_time: "5 min",
    },
    ItemDef {
        id: "se-5",
        category: Seo,
        label: "Attributes/amenities are set",
        rule: UNKNOWN,
        weight: NiceToHave,
        fix_guide: "Go to Info → Attributes. Set amenities like WiFi, parking, wheelchair access, outdoor seating, etc.",
        estimated_time: "5 min",
    },
    ItemDef {
        id: "se-6",
        category: Seo,
        label: "Website links back to GBP",
        rule: Rule::WebsiteSet,
        weight: Important,
        fix_guide: "Add a Google Maps embed and 'Find us on Google' link on your website's contact page for SEO synergy.",
        estimated_time: "10 min",
    },
    ItemDef {
        id: "se-7",
        category: Seo,
        label: "Consistent NAP across web",
        rule: Rule::NapComplete,
        weight: Critical,
        fix_guide: "Ensure your Name, Address, and Phone (NAP) are identical on your website, social media, and directories like Justdial, Sulekha.",
        estimated_time: "15 min",
    },
    // Technical
    ItemDef {
        id: "tc-1",
        category: Technical,
        label: "Listing is verified",
        rule: ASSUMED_OK,
        weight: Critical,
        fix_guide: "Verify your listing via postcard, phone, or email. Unverified listings don't appear in search results.",
        estimated_time: "1-5 days",
    },
    ItemDef {
        id: "tc-2",
        category: Technical,
        label: "No duplicate listings",
        rule: ASSUMED_OK,
        weight: Critical,
        fix_guide: "Search for your business on Google Maps. If duplicates exist, report them via 'Suggest an edit' → 'Close or remove'.",
        estimated_time: "10 min",
    },
    ItemDef {
        id: "tc-3",
        category: Technical,
        label: "Website is mobile-friendly",
        rule: Rule::WebsiteSet,
        weight: Important,
        fix_guide: "Test your website at Google's Mobile-Friendly Test. Over 60% of GBP clicks come from mobile devices.",
        estimated_time: "Varies",
    },
    ItemDef {
        id: "tc-4",
        category: Technical,
        label: "Website loads in under 3 seconds",
        rule: Rule::WebsiteSet,
        weight: Important,
        fix_guide: "Test at PageSpeed Insights. Compress images, enable caching, and use a CDN for faster loading.",
        estimated_time: "Varies",
    },
    ItemDef {
        id: "tc-5",
        category: Technical,
        label: "SSL certificate active (HTTPS)",
        rule: Rule::HttpsWebsite,
        weight: Important,
        fix_guide: "Ensure your website uses HTTPS. Most hosting providers offer free SSL certificates via Let's Encrypt.",
        estimated_time: "15 min",
    },
    ItemDef {
        id: "tc-6",
        category: Technical,
        label: "Google Search Console connected",
        rule: UNKNOWN,
        weight: NiceToHave,
        fix_guide: "Connect your website to Google Search Console for insights on how customers find you via search.",
        estimated_time: "10 min",
    },
];
