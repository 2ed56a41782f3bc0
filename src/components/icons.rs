//! Centralized icon definitions.
//!
//! Maps semantic icon names to the lucide set.

use icondata::Icon;

pub const CHEVRON_RIGHT: Icon = icondata::LuChevronRight;
pub const CHEVRON_DOWN: Icon = icondata::LuChevronDown;
pub const FILE: Icon = icondata::LuFile;
pub const FOLDER: Icon = icondata::LuFolder;
pub const FOLDER_OPEN: Icon = icondata::LuFolderOpen;
pub const LOADING: Icon = icondata::LuLoaderCircle;
pub const ERROR: Icon = icondata::LuCircleAlert;
pub const RETRY: Icon = icondata::LuRotateCw;
