//! Swipe widgets.
//!
//! - [`SwipeableListItem`]: List row that is swiped right to trigger an action

mod swipeable_list_item;

pub use swipeable_list_item::{
    BACK_CLASS, FRONT_CLASS, ITEM_CLASS, Layer, LayerRole, SwipeFrame, SwipeStatus,
    SwipeableListItem,
};
