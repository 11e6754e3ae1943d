//! [`ActorEntity`] implementation for [`Item`].

use super::ItemError;
use crate::model::{total_price, CatalogAnswer, CatalogQuery, CatalogStats, Item, ItemCreate, ItemId, ItemPatch};
use resource_framework::ActorEntity;

impl ActorEntity for Item {
    type Id = ItemId;
    type Create = ItemCreate;
    type Update = ItemPatch;
    type Query = CatalogQuery;
    type QueryResult = CatalogAnswer;
    type Context = ();
    type Error = ItemError;

    fn id(&self) -> ItemId {
        self.id
    }

    fn from_create_params(id: ItemId, params: ItemCreate) -> Result<Self, ItemError> {
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
        })
    }

    fn on_update(&mut self, update: ItemPatch) -> Result<(), ItemError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        Ok(())
    }

    fn query(records: &[Self], query: CatalogQuery) -> CatalogAnswer {
        match query {
            CatalogQuery::Search(needle) => CatalogAnswer::Matches(
                records
                    .iter()
                    .filter(|item| item.name_contains(&needle))
                    .cloned()
                    .collect(),
            ),
            CatalogQuery::Total => CatalogAnswer::Total(total_price(records)),
            CatalogQuery::Stats => CatalogAnswer::Stats(CatalogStats::of(records)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Item> {
        [("Apple", 50.0), ("Banana", 20.0), ("Pineapple", 30.0)]
            .into_iter()
            .zip(1..)
            .map(|((name, price), id)| {
                Item::from_create_params(ItemId(id), ItemCreate::new(name, price).unwrap()).unwrap()
            })
            .collect()
    }

    #[test]
    fn search_keeps_store_order() {
        let CatalogAnswer::Matches(found) = Item::query(&catalog(), CatalogQuery::Search("apple".into()))
        else {
            panic!("expected matches");
        };
        let ids: Vec<_> = found.iter().map(|item| item.id).collect();
        assert_eq!(ids, [ItemId(1), ItemId(3)]);
    }

    #[test]
    fn total_sums_every_price() {
        assert_eq!(
            Item::query(&catalog(), CatalogQuery::Total),
            CatalogAnswer::Total(100.0)
        );
    }

    #[test]
    fn merge_price_keeps_name() {
        let mut apple = catalog().remove(0);
        apple.on_update(ItemPatch::with_price(55.0).unwrap()).unwrap();
        assert_eq!((apple.name.as_str(), apple.price), ("Apple", 55.0));
    }

    #[test]
    fn merge_name_keeps_price() {
        let mut apple = catalog().remove(0);
        apple.on_update(ItemPatch::with_name("Green apple").unwrap()).unwrap();
        assert_eq!((apple.name.as_str(), apple.price), ("Green apple", 50.0));
    }
}
