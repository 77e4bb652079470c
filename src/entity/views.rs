//! Typed catalog views
//!
//! Each view wraps one [`Entity`] and names the fields the catalog service
//! returns for that kind of record. Text accessors return `None` for absent
//! fields, numeric accessors return `Ok(None)`, and flags default to `false`.

use super::{Entity, EntityView};
use crate::error::FormatError;

macro_rules! entity_view {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            entity: Entity,
        }

        impl EntityView for $name {
            fn from_entity(entity: Entity) -> Self {
                $name { entity }
            }

            fn entity(&self) -> &Entity {
                &self.entity
            }
        }
    };
}

macro_rules! text_fields {
    ($($method:ident => $key:literal),* $(,)?) => {
        $(
            pub fn $method(&self) -> Option<&str> {
                self.entity.scalar($key)
            }
        )*
    };
}

macro_rules! int_fields {
    ($($method:ident => $key:literal),* $(,)?) => {
        $(
            pub fn $method(&self) -> Result<Option<i32>, FormatError> {
                self.entity.int($key)
            }
        )*
    };
}

macro_rules! float_fields {
    ($($method:ident => $key:literal),* $(,)?) => {
        $(
            pub fn $method(&self) -> Result<Option<f32>, FormatError> {
                self.entity.float($key)
            }
        )*
    };
}

macro_rules! flag_fields {
    ($($method:ident => $key:literal),* $(,)?) => {
        $(
            pub fn $method(&self) -> bool {
                self.entity.flag($key)
            }
        )*
    };
}

entity_view! {
    /// One step of a product's category path
    Category
}

impl Category {
    text_fields! {
        id => "id",
        name => "name",
    }
}

entity_view! {
    /// A marketplace or promotional offer attached to a product
    Offer
}

impl Offer {
    text_fields! {
        id => "id",
        text => "text",
        url => "url",
    }
}

entity_view! {
    /// A product related to another (accessory, bundle member)
    RelatedItem
}

impl RelatedItem {
    text_fields! {
        sku => "sku",
        title => "title",
        kind => "type",
    }

    flag_fields! {
        is_active => "active",
    }
}

entity_view! {
    /// A retail store location
    ///
    /// Store availability queries nest the matching products under
    /// `products`.
    Store
}

impl Store {
    text_fields! {
        store_id => "storeId",
        name => "name",
        address => "address",
        city => "city",
        region => "region",
        postal_code => "postalCode",
        full_postal_code => "fullPostalCode",
        country => "country",
        lat => "lat",
        lng => "lng",
        phone => "phone",
        hours => "hours",
    }

    float_fields! {
        distance => "distance",
    }

    pub fn products(&self) -> Vec<Product> {
        self.entity.list("products")
    }
}

entity_view! {
    /// A catalog product
    Product
}

impl Product {
    text_fields! {
        sku => "sku",
        product_id => "productId",
        name => "name",
        kind => "type",
        start_date => "startDate",
        active_update_date => "activeUpdateDate",
        price_update_date => "priceUpdateDate",
        url => "url",
        buy_url => "buyUrl",
        affiliate_url => "affiliateUrl",
        add_to_cart_url => "addToCartUrl",
        affiliate_add_to_cart_url => "affiliateAddToCartUrl",
        cj_affiliate_url => "cjAffiliateUrl",
        upc => "upc",
        format => "format",
        in_store_availability_text => "inStoreAvailabilityText",
        in_store_availability_update_date => "inStoreAvailabilityUpdateDate",
        item_update_date => "itemUpdateDate",
        online_availability_text => "onlineAvailabilityText",
        online_availability_update_date => "onlineAvailabilityUpdateDate",
        release_date => "releaseDate",
        short_description => "shortDescription",
        description => "description",
        long_description => "longDescription",
        product_class => "class",
        subclass => "subclass",
        department => "department",
        manufacturer => "manufacturer",
        model_number => "modelNumber",
        image => "image",
        large_front_image => "largeFrontImage",
        medium_image => "mediumImage",
        thumbnail_image => "thumbnailImage",
        large_image => "largeImage",
        alternate_views_image => "alternateViewsImage",
        angle_image => "angleImage",
        back_view_image => "backViewImage",
        energy_guide_image => "energyGuideImage",
        left_view_image => "leftViewImage",
        accessories_image => "accessoriesImage",
        remote_control_image => "remoteControlImage",
        right_view_image => "rightViewImage",
        top_view_image => "topViewImage",
        color => "color",
        depth => "depth",
        height => "height",
        width => "width",
        navigability => "navigability",
        orderable => "orderable",
        warranty_labor => "warrantyLabor",
        warranty_parts => "warrantyParts",
    }

    int_fields! {
        customer_review_count => "customerReviewCount",
        product_class_id => "classId",
        subclass_id => "subclassId",
        department_id => "departmentId",
    }

    float_fields! {
        regular_price => "regularPrice",
        sale_price => "salePrice",
        customer_review_average => "customerReviewAverage",
        shipping_cost => "shippingCost",
        dollar_savings => "dollarSavings",
        weight => "weight",
        shipping_weight => "shippingWeight",
    }

    flag_fields! {
        is_new => "new",
        is_active => "active",
        has_free_shipping => "freeShipping",
        has_in_store_availability => "inStoreAvailability",
        has_online_availability => "onlineAvailability",
        is_print_only => "printOnly",
        is_special_order => "specialOrder",
    }

    pub fn category_path(&self) -> Vec<Category> {
        self.entity.list("categoryPath")
    }

    pub fn details(&self) -> Vec<String> {
        self.entity.strings("details")
    }

    pub fn features(&self) -> Vec<String> {
        self.entity.strings("features")
    }

    pub fn offers(&self) -> Vec<Offer> {
        self.entity.list("offers")
    }

    pub fn related(&self) -> Vec<RelatedItem> {
        self.entity.list("related")
    }
}
