use crate::models::Property;

/// The property every fresh portfolio starts with.
pub fn seed_property() -> Property {
    Property {
        id: "1".to_string(),
        address: "1204 Willow Creek Dr, Austin, TX".to_string(),
        price: 450_000.0,
        images: vec![
            "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?auto=format&fit=crop&w=800&q=80".to_string(),
            "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?auto=format&fit=crop&w=800&q=80".to_string(),
            "https://images.unsplash.com/photo-1484154218962-a1c002085d2f?auto=format&fit=crop&w=800&q=80".to_string(),
        ],
        bedrooms: 4,
        bathrooms: 3.0,
        sqft: 2400,
        down_payment_percent: 20.0,
        interest_rate: 6.5,
        loan_term_years: 30,
        nightly_rate: 250.0,
        occupancy_rate: 65.0,
        property_tax: 8000.0,
        insurance: 2000.0,
        management_fee_percent: 25.0,
        snow_removal: 0.0,
        hot_tub_maintenance: 150.0,
        utilities: 300.0,
        maintenance: 200.0,
        hoa: 50.0,
        other_expenses: 0.0,
        fair_offer_recommendation: "Based on the strong cash flow and 65% occupancy estimate, \
            the list price of $450k appears fair. An offer of $440k might be accepted \
            given market cooling."
            .to_string(),
        is_favorite: true,
    }
}

/// Records loaded into the portfolio at startup.
pub fn initial_properties() -> Vec<Property> {
    vec![seed_property()]
}
