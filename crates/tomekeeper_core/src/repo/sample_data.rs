//! Built-in sample datasets.
//!
//! # Responsibility
//! - Seed the in-memory store.
//! - Serve as the list fallback when the remote catalog is unreachable.
//! - Provide the static rare marketplace catalog.

use crate::model::catalog_item::{CatalogItem, CatalogItemId};
use crate::model::rare_item::RareItem;

/// Returns the demo inventory (ids `1..=31`, ascending).
pub fn sample_catalog() -> Vec<CatalogItem> {
    vec![
        sample(
            1,
            "978-0-7475-3269-9",
            "Harry Potter and the Philosopher's Stone",
            "J.K. Rowling",
            19.99,
            15,
            "https://prodimage.images-bn.com/pimages/9781546148500_p0_v4_s1200x1200.jpg",
        ),
        sample(
            2,
            "978-0-544-00341-5",
            "The Hobbit",
            "J.R.R. Tolkien",
            14.99,
            8,
            "https://bookoutlet.com/_next/image?url=https%3A%2F%2Fimages.bookoutlet.com%2Fcovers%2Flarge%2Fisbn978061%2F9780618260300-l.jpg&w=3840&q=75",
        ),
        sample(
            3,
            "978-0-345-39180-3",
            "The Lion, the Witch and the Wardrobe",
            "C.S. Lewis",
            12.99,
            12,
            "https://store.rabbitroom.com/cdn/shop/products/516lPV5TmxL._SX334_BO1_204_203_200.jpg?v=1599253759&width=600",
        ),
        sample(
            4,
            "978-0-141-43951-8",
            "1984",
            "George Orwell",
            13.99,
            20,
            "https://bookoutlet.com/_next/image?url=https%3A%2F%2Fimages.bookoutlet.com%2Fcovers%2Flarge%2Fisbn978140%2F9781405965347-l.jpg&w=640&q=75",
        ),
        sample(
            5,
            "978-0-06-112008-4",
            "To Kill a Mockingbird",
            "Harper Lee",
            15.99,
            3,
            "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4f/To_Kill_a_Mockingbird_%28first_edition_cover%29.jpg/500px-To_Kill_a_Mockingbird_%28first_edition_cover%29.jpg",
        ),
        sample(
            6,
            "978-0-316-76948-0",
            "The Catcher in the Rye",
            "J.D. Salinger",
            11.99,
            7,
            "https://upload.wikimedia.org/wikipedia/commons/thumb/8/89/The_Catcher_in_the_Rye_%281951%2C_first_edition_cover%29.jpg/500px-The_Catcher_in_the_Rye_%281951%2C_first_edition_cover%29.jpg",
        ),
        sample(
            7,
            "978-1-885395-00-2",
            "The Emerald Tablets",
            "Hermes Trismegistus",
            24.99,
            6,
            "https://images.booksense.com/images/149/866/9781603866149.jpg",
        ),
        sample(
            8,
            "978-1-932073-20-8",
            "The Way of the Peaceful Warrior",
            "Dan Millman",
            16.99,
            10,
            "https://m.media-amazon.com/images/I/51IYDk0JlJL._SY445_SX342_FMwebp_.jpg",
        ),
        sample(
            9,
            "978-1-57731-480-6",
            "The Power of Now",
            "Eckhart Tolle",
            18.99,
            14,
            "https://newworldlibrary.com/wp-content/webp-express/webp-images/uploads/2023/11/New-Power-of-Now86-993x1536.jpg.webp",
        ),
        sample(
            10,
            "978-0-06-025665-3",
            "The Giving Tree",
            "Shel Silverstein",
            17.99,
            12,
            "https://npr.brightspotcdn.com/dims4/default/bb75182/2147483647/strip/true/crop/500x627+0+0/resize/1760x2208!/format/webp/quality/90/?url=http%3A%2F%2Fnpr-brightspot.s3.amazonaws.com%2Flegacy%2Fsites%2Fwwno%2Ffiles%2F202012%2FThe_Giving_Tree_1.jpg",
        ),
        sample(
            11,
            "978-0-06-025667-7",
            "Where the Sidewalk Ends",
            "Shel Silverstein",
            19.99,
            8,
            "https://upload.wikimedia.org/wikipedia/en/b/b3/Where_the_Sidewalk_Ends_%281974%29.jpg",
        ),
        sample(
            12,
            "978-1-5445-0258-3",
            "Can't Hurt Me",
            "David Goggins",
            26.99,
            15,
            "https://prodimage.images-bn.com/pimages/9781544512273_p0_v9_s600x595.jpg",
        ),
        sample(
            13,
            "978-0-87220-633-9",
            "Five Dialogues",
            "Plato",
            16.99,
            10,
            "https://www.gutenberg.org/cache/epub/76464/pg76464.cover.medium.jpg",
        ),
        sample(
            14,
            "978-1-4516-7331-9",
            "Fahrenheit 451",
            "Ray Bradbury",
            15.99,
            7,
            "https://upload.wikimedia.org/wikipedia/en/d/db/Fahrenheit_451_1st_ed_cover.jpg",
        ),
        sample(
            15,
            "978-0-440-17800-4",
            "Shogun",
            "James Clavell",
            22.99,
            5,
            "https://archangelstomp.com/wp-content/uploads/2012/01/ba8ab-shogun.jpg",
        ),
        sample(
            16,
            "978-0-517-88726-2",
            "Fingerprints of the Gods",
            "Graham Hancock",
            20.99,
            9,
            "https://m.media-amazon.com/images/I/71ejchQQRhL._SL1500_.jpg",
        ),
        sample(
            17,
            "978-0-7434-7712-3",
            "Hamlet",
            "William Shakespeare",
            9.99,
            18,
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSY8FwdPI2ip4ia5T1TINZEniH34ggFFOuI-w&s",
        ),
        sample(
            18,
            "978-0-440-35510-1",
            "Man and His Symbols",
            "Carl Jung",
            19.99,
            11,
            "https://bookoutlet.com/_next/image?url=https%3A%2F%2Fimages.bookoutlet.com%2Fcovers%2Flarge%2Fisbn978044%2F9780440351832-l.jpg&w=640&q=75",
        ),
        sample(
            19,
            "978-0-8070-1427-1",
            "Man's Search for Meaning",
            "Viktor Frankl",
            1887.77,
            4,
            "https://d3525k1ryd2155.cloudfront.net/h/795/584/1394584795.0.m.1.jpg",
        ),
        sample(
            20,
            "978-0-06-231609-7",
            "Sapiens: A Brief History of Humankind",
            "Yuval Noah Harari",
            21.99,
            13,
            "https://upload.wikimedia.org/wikipedia/commons/thumb/6/6d/Sapiens-_A_Brief_History_of_Humankind.png/330px-Sapiens-_A_Brief_History_of_Humankind.png",
        ),
        sample(
            21,
            "978-0-451-19114-3",
            "Atlas Shrugged",
            "Ayn Rand",
            25.99,
            6,
            "https://i.ebayimg.com/images/g/i6AAAOSwIQ1iLhqq/s-l1600.webp",
        ),
        sample(
            22,
            "978-0-439-13959-7",
            "Harry Potter and the Chamber of Secrets",
            "J.K. Rowling",
            19.99,
            14,
            "https://i.ebayimg.com/images/g/4I0AAeSwA91oUK5L/s-l1600.webp",
        ),
        sample(
            23,
            "978-0-439-13635-0",
            "Harry Potter and the Prisoner of Azkaban",
            "J.K. Rowling",
            20.99,
            12,
            "https://i.ebayimg.com/images/g/Z1wAAOSwIIlmRA~t/s-l1600.webp",
        ),
        sample(
            24,
            "978-0-439-13959-8",
            "Harry Potter and the Goblet of Fire",
            "J.K. Rowling",
            22.99,
            10,
            "https://i.ebayimg.com/images/g/jewAAOSwxCdfR1E0/s-l1600.webp",
        ),
        sample(
            25,
            "978-0-439-35806-4",
            "Harry Potter and the Order of the Phoenix",
            "J.K. Rowling",
            24.99,
            9,
            "https://thesalmonbookshop.com/cdn/shop/products/harry-potter-and-the-order-of-the-phoenix-jk-rowling-the-salmon-bookshop-ennistymon-county-clare_1024x1024.jpg?v=1608146928",
        ),
        sample(
            26,
            "978-0-439-78454-2",
            "Harry Potter and the Half-Blood Prince",
            "J.K. Rowling",
            21.99,
            11,
            "https://m.media-amazon.com/images/I/61jLPrvDreL._SY522_.jpg",
        ),
        sample(
            27,
            "978-0-545-01022-1",
            "Harry Potter and the Deathly Hallows",
            "J.K. Rowling",
            2168.88,
            13,
            "https://sothebys-md.brightspotcdn.com/dims4/default/c539950/2147483647/strip/true/crop/2400x2400+0+0/resize/800x800!/quality/90/?url=http%3A%2F%2Fsothebys-brightspot.s3.amazonaws.com%2Fmedia-desk%2F85%2F18%2F091a2b814d5582c447962f08b59f%2Fjk-rowling-deathly-hallows-signed-front.jpg",
        ),
        sample(
            28,
            "978-0-316-01584-4",
            "Twilight",
            "Stephenie Meyer",
            18.99,
            16,
            "https://m.media-amazon.com/images/I/31cOZeTAIRL._SY445_SX342_FMwebp_.jpg",
        ),
        sample(
            29,
            "978-0-316-16017-9",
            "New Moon",
            "Stephenie Meyer",
            18.99,
            14,
            "https://m.media-amazon.com/images/I/91mXSjFNdLL._SY466_.jpg",
        ),
        sample(
            30,
            "978-0-316-16028-5",
            "Eclipse",
            "Stephenie Meyer",
            19.99,
            12,
            "https://i.ebayimg.com/images/g/jz4AAOSwZzBlkNV2/s-l1600.webp",
        ),
        sample(
            31,
            "978-0-316-06792-8",
            "Breaking Dawn",
            "Stephenie Meyer",
            20.99,
            15,
            "https://m.media-amazon.com/images/I/51vW5YKOEiL.jpg",
        ),
    ]
}

fn sample(
    id: CatalogItemId,
    code: &str,
    title: &str,
    creator: &str,
    unit_price: f64,
    quantity_on_hand: u32,
    image_ref: &str,
) -> CatalogItem {
    CatalogItem {
        id,
        code: code.to_string(),
        title: title.to_string(),
        creator: creator.to_string(),
        unit_price,
        quantity_on_hand,
        image_ref: Some(image_ref.to_string()),
    }
}

/// Returns the read-only rare marketplace catalog.
pub fn rare_catalog() -> Vec<RareItem> {
    vec![
        RareItem {
            id: "gutenberg-bible-leaf".to_string(),
            title: "Gutenberg Bible, Single Leaf".to_string(),
            creator: "Johannes Gutenberg".to_string(),
            year: 1455,
            valuation: 185_000.0,
            image_ref: None,
            provenance: "Private European collection; acquired at auction in 1987.".to_string(),
            condition: "Clean leaf with wide margins and minor marginal toning.".to_string(),
            condition_grade: "Fine".to_string(),
            description: "An original leaf from the first major book printed with movable type."
                .to_string(),
            appraisal_summary: "Authenticated against census records of dispersed leaves."
                .to_string(),
            verified: true,
        },
        RareItem {
            id: "first-folio".to_string(),
            title: "Mr. William Shakespeares Comedies, Histories, & Tragedies".to_string(),
            creator: "William Shakespeare".to_string(),
            year: 1623,
            valuation: 9_950_000.0,
            image_ref: None,
            provenance: "Descended through an English country-house library.".to_string(),
            condition: "Complete, later calf binding, title leaf remargined.".to_string(),
            condition_grade: "Very Good".to_string(),
            description: "The first collected edition of Shakespeare's plays.".to_string(),
            appraisal_summary: "Collation verified leaf by leaf; binding is nineteenth century."
                .to_string(),
            verified: true,
        },
        RareItem {
            id: "euclid-elements-1482".to_string(),
            title: "Elementa Geometriae".to_string(),
            creator: "Euclid".to_string(),
            year: 1482,
            valuation: 1_250_000.0,
            image_ref: None,
            provenance: "Venetian printing by Erhard Ratdolt; American private library.".to_string(),
            condition: "Rubricated initials, early marginalia, light dampstaining.".to_string(),
            condition_grade: "Good".to_string(),
            description: "First printed edition of Euclid with geometric diagrams.".to_string(),
            appraisal_summary: "Diagrams and colophon match the Ratdolt edition.".to_string(),
            verified: true,
        },
        RareItem {
            id: "diamond-sutra-fragment".to_string(),
            title: "Diamond Sutra Woodblock Fragment".to_string(),
            creator: "Unknown".to_string(),
            year: 868,
            valuation: 0.0,
            image_ref: None,
            provenance: "Dunhuang cave library dispersal.".to_string(),
            condition: "Fragile paper scroll section, professionally stabilized.".to_string(),
            condition_grade: "Fair".to_string(),
            description: "A fragment associated with the earliest dated printed book.".to_string(),
            appraisal_summary: "Available by private consultation only.".to_string(),
            verified: false,
        },
        RareItem {
            id: "aristotle-papyrus".to_string(),
            title: "Papyrus Fragment of Aristotle's Constitution".to_string(),
            creator: "Aristotle".to_string(),
            year: -350,
            valuation: 64_000.0,
            image_ref: None,
            provenance: "Egyptian excavation records, later Oxford private collection.".to_string(),
            condition: "Glass-mounted fragment with legible columns.".to_string(),
            condition_grade: "Good".to_string(),
            description: "A papyrus witness to a lost Aristotelian text.".to_string(),
            appraisal_summary: "Script dated paleographically; ink consistent with period."
                .to_string(),
            verified: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{rare_catalog, sample_catalog};
    use std::collections::HashSet;

    #[test]
    fn sample_catalog_has_unique_ascending_ids() {
        let items = sample_catalog();
        assert_eq!(items.len(), 31);
        let ids = items.iter().map(|item| item.id).collect::<Vec<_>>();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
    }

    #[test]
    fn rare_catalog_slugs_are_unique() {
        let items = rare_catalog();
        let slugs = items.iter().map(|item| item.id.as_str()).collect::<HashSet<_>>();
        assert_eq!(slugs.len(), items.len());
    }
}
