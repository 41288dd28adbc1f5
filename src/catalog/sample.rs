use crate::catalog::traits::CatalogSource;
use crate::models::{
    CityCount, Coordinates, Listing, NearbyPlace, Occupancy, Owner, Room, RoomType,
};
use anyhow::Result;
use async_trait::async_trait;

/// Built-in catalog used when no file or data store is configured
pub struct SampleCatalog;

#[async_trait]
impl CatalogSource for SampleCatalog {
    async fn fetch(&self) -> Result<Vec<Listing>> {
        Ok(sample_listings())
    }

    fn source_name(&self) -> &'static str {
        "sample"
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn room(id: &str, room_type: RoomType, price: i64, available: u32, ac: bool) -> Room {
    Room {
        id: id.to_string(),
        room_type,
        sharing: room_type.sharing(),
        price,
        deposit: price * 2,
        available,
        ac,
    }
}

fn owner(name: &str, phone: &str, verified: bool) -> Option<Owner> {
    Some(Owner {
        name: name.to_string(),
        phone: phone.to_string(),
        verified,
    })
}

fn places(items: &[(&str, &str)]) -> Vec<NearbyPlace> {
    items
        .iter()
        .map(|(name, distance)| NearbyPlace {
            name: name.to_string(),
            distance: distance.to_string(),
        })
        .collect()
}

/// The six-listing reference dataset (ids "1" through "6")
pub fn sample_listings() -> Vec<Listing> {
    use RoomType::{Double, Quad, Single, Triple};

    vec![
        Listing {
            id: "1".to_string(),
            name: "Sunrise PG for Men".to_string(),
            slug: "sunrise-pg-koramangala".to_string(),
            address: "123, 1st Cross, 4th Block".to_string(),
            locality: "Koramangala".to_string(),
            city: "Bangalore".to_string(),
            landmark: Some("Near Sony Signal".to_string()),
            occupancy: Occupancy::Male,
            rating: 4.5,
            review_count: 128,
            images: strings(&[
                "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=800",
                "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=800",
                "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=800",
            ]),
            amenities: strings(&[
                "WiFi", "AC", "Power Backup", "Laundry", "Housekeeping", "CCTV", "Parking",
            ]),
            rooms: vec![
                room("r1", Single, 12000, 2, true),
                room("r2", Double, 8000, 5, true),
                room("r3", Triple, 6000, 3, false),
            ],
            description: "A premium PG accommodation for working professionals and students. Located in the heart of Koramangala with easy access to IT parks and metro stations."
                .to_string(),
            rules: strings(&[
                "No smoking",
                "No alcohol",
                "Guests allowed till 9 PM",
                "Gate closes at 11 PM",
            ]),
            owner: owner("Rajesh Kumar", "+91 9876543210", true),
            coordinates: Some(Coordinates { lat: 12.9352, lng: 77.6245 }),
            featured: true,
            verified: true,
            min_price: 6000,
            max_price: 12000,
            food_included: true,
            nearby_places: places(&[
                ("Forum Mall", "500m"),
                ("Metro Station", "1.2km"),
                ("Christ University", "2km"),
            ]),
        },
        Listing {
            id: "2".to_string(),
            name: "Grace Ladies PG".to_string(),
            slug: "grace-ladies-pg-indiranagar".to_string(),
            address: "45, 12th Main Road".to_string(),
            locality: "Indiranagar".to_string(),
            city: "Bangalore".to_string(),
            landmark: Some("Near 100 Feet Road".to_string()),
            occupancy: Occupancy::Female,
            rating: 4.8,
            review_count: 256,
            images: strings(&[
                "https://images.unsplash.com/photo-1493809842364-78817add7ffb?w=800",
                "https://images.unsplash.com/photo-1505691938895-1758d7feb511?w=800",
                "https://images.unsplash.com/photo-1484101403633-562f891dc89a?w=800",
            ]),
            amenities: strings(&[
                "WiFi", "AC", "Power Backup", "Laundry", "Housekeeping", "CCTV", "Gym",
                "Rooftop Garden",
            ]),
            rooms: vec![
                room("r1", Single, 15000, 1, true),
                room("r2", Double, 10000, 4, true),
            ],
            description: "A safe and comfortable PG for women with premium amenities. Located in the vibrant Indiranagar area with great food and shopping options nearby."
                .to_string(),
            rules: strings(&[
                "No male visitors after 7 PM",
                "Gate closes at 10:30 PM",
                "Maintain silence after 11 PM",
            ]),
            owner: owner("Sunita Sharma", "+91 9876543211", true),
            coordinates: Some(Coordinates { lat: 12.9784, lng: 77.6408 }),
            featured: true,
            verified: true,
            min_price: 10000,
            max_price: 15000,
            food_included: true,
            nearby_places: places(&[
                ("100 Feet Road", "200m"),
                ("Indiranagar Metro", "800m"),
            ]),
        },
        Listing {
            id: "3".to_string(),
            name: "Urban Co-living Space".to_string(),
            slug: "urban-coliving-hsr".to_string(),
            address: "78, Sector 5".to_string(),
            locality: "HSR Layout".to_string(),
            city: "Bangalore".to_string(),
            landmark: Some("Near BDA Complex".to_string()),
            occupancy: Occupancy::Mixed,
            rating: 4.3,
            review_count: 89,
            images: strings(&[
                "https://images.unsplash.com/photo-1536376072261-38c75010e6c9?w=800",
                "https://images.unsplash.com/photo-1515263487990-61b07816b324?w=800",
                "https://images.unsplash.com/photo-1523755231516-e43fd2e8dca5?w=800",
            ]),
            amenities: strings(&[
                "WiFi", "AC", "Power Backup", "Laundry", "Housekeeping", "CCTV", "Gaming Zone",
                "Coworking Space",
            ]),
            rooms: vec![
                room("r1", Single, 18000, 3, true),
                room("r2", Double, 12000, 6, true),
                room("r3", Triple, 9000, 4, true),
            ],
            description: "Modern co-living space designed for the new-age professional. Community events, networking opportunities, and a vibrant atmosphere."
                .to_string(),
            rules: strings(&[
                "Quiet hours 11 PM - 7 AM",
                "Guests must register",
                "No smoking indoors",
            ]),
            owner: owner("Urban Living Pvt Ltd", "+91 9876543212", true),
            coordinates: Some(Coordinates { lat: 12.9116, lng: 77.6389 }),
            featured: true,
            verified: true,
            min_price: 9000,
            max_price: 18000,
            food_included: false,
            nearby_places: places(&[
                ("HSR BDA Complex", "300m"),
                ("Agara Lake", "1.5km"),
            ]),
        },
        Listing {
            id: "4".to_string(),
            name: "Budget Boys Hostel".to_string(),
            slug: "budget-boys-btm".to_string(),
            address: "34, 2nd Stage".to_string(),
            locality: "BTM Layout".to_string(),
            city: "Bangalore".to_string(),
            landmark: None,
            occupancy: Occupancy::Male,
            rating: 3.9,
            review_count: 67,
            images: strings(&[
                "https://images.unsplash.com/photo-1555854877-bab0e564b8d5?w=800",
                "https://images.unsplash.com/photo-1560185127-6ed189bf02f4?w=800",
            ]),
            amenities: strings(&["WiFi", "Power Backup", "Laundry", "CCTV"]),
            rooms: vec![
                room("r1", Double, 5500, 8, false),
                room("r2", Triple, 4500, 6, false),
                room("r3", Quad, 3800, 4, false),
            ],
            description: "Affordable PG accommodation perfect for students and freshers. Basic amenities with a friendly environment."
                .to_string(),
            rules: strings(&[
                "No smoking",
                "Visitors till 8 PM",
                "Gate closes at 10 PM",
            ]),
            owner: owner("Mohammed Ali", "+91 9876543213", false),
            coordinates: Some(Coordinates { lat: 12.9166, lng: 77.6101 }),
            featured: false,
            verified: true,
            min_price: 3800,
            max_price: 5500,
            food_included: false,
            nearby_places: places(&[
                ("BTM Lake", "800m"),
                ("Silk Board Junction", "2km"),
            ]),
        },
        Listing {
            id: "5".to_string(),
            name: "Premium Girls Residence".to_string(),
            slug: "premium-girls-whitefield".to_string(),
            address: "Block A, IT Park Road".to_string(),
            locality: "Whitefield".to_string(),
            city: "Bangalore".to_string(),
            landmark: Some("Near ITPL".to_string()),
            occupancy: Occupancy::Female,
            rating: 4.7,
            review_count: 145,
            images: strings(&[
                "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800",
                "https://images.unsplash.com/photo-1513694203232-719a280e022f?w=800",
            ]),
            amenities: strings(&[
                "WiFi", "AC", "Power Backup", "Laundry", "Housekeeping", "CCTV", "Gym",
                "Swimming Pool", "Cafeteria",
            ]),
            rooms: vec![
                room("r1", Single, 20000, 2, true),
                room("r2", Double, 14000, 5, true),
            ],
            description: "Luxury living for working women in Whitefield. Resort-style amenities with top-notch security and a professional environment."
                .to_string(),
            rules: strings(&[
                "Visitors with prior approval",
                "No smoking or alcohol",
                "Maintain decorum",
            ]),
            owner: owner("Premium Stays Pvt Ltd", "+91 9876543214", true),
            coordinates: Some(Coordinates { lat: 12.9698, lng: 77.75 }),
            featured: true,
            verified: true,
            min_price: 14000,
            max_price: 20000,
            food_included: true,
            nearby_places: places(&[
                ("ITPL", "500m"),
                ("Phoenix Marketcity", "3km"),
            ]),
        },
        Listing {
            id: "6".to_string(),
            name: "Student Hub Coliving".to_string(),
            slug: "student-hub-electronic-city".to_string(),
            address: "Plot 56, Phase 1".to_string(),
            locality: "Electronic City".to_string(),
            city: "Bangalore".to_string(),
            landmark: None,
            occupancy: Occupancy::Mixed,
            rating: 4.1,
            review_count: 92,
            images: strings(&[
                "https://images.unsplash.com/photo-1524758631624-e2822e304c36?w=800",
                "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=800",
            ]),
            amenities: strings(&[
                "WiFi", "AC", "Power Backup", "Laundry", "Housekeeping", "CCTV", "Study Room",
                "Library",
            ]),
            rooms: vec![
                room("r1", Double, 7500, 10, false),
                room("r2", Triple, 5500, 8, false),
                room("r3", Quad, 4500, 6, false),
            ],
            description: "Designed specifically for students with dedicated study areas, library access, and a quiet environment conducive to learning."
                .to_string(),
            rules: strings(&[
                "Study hours 6 PM - 10 PM",
                "Quiet hours after 10 PM",
                "No parties",
            ]),
            owner: owner("Student Housing Solutions", "+91 9876543215", true),
            coordinates: Some(Coordinates { lat: 12.8399, lng: 77.677 }),
            featured: false,
            verified: true,
            min_price: 4500,
            max_price: 7500,
            food_included: true,
            nearby_places: places(&[
                ("Infosys Campus", "1km"),
                ("Electronic City Bus Stand", "500m"),
            ]),
        },
    ]
}

/// Marketing counts shown on the home page, not derived from any catalog
pub fn popular_cities() -> Vec<CityCount> {
    [
        ("Bangalore", 2500),
        ("Mumbai", 1800),
        ("Delhi NCR", 2200),
        ("Pune", 1500),
        ("Hyderabad", 1200),
        ("Chennai", 900),
    ]
    .into_iter()
    .map(|(name, count)| CityCount {
        name: name.to_string(),
        count,
    })
    .collect()
}
