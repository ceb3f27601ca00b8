/*!
# CGA Framework - minifb Backend

Window and input backend for the CGA framework built on minifb.

`MinifbSurface` implements the framework's `PresentationSurface`: it shows
the software renderer's ARGB back buffer in a native window and translates
keyboard and mouse state into framework `InputEvent`s.

```no_run
use cga_framework::cga::{Framework, FrameworkConfig};
use cga_framework_renderer_minifb::MinifbSurface;

let config = FrameworkConfig::default();
let surface = MinifbSurface::new(config.width, config.height, &config.title)?;
let framework = Framework::new(config, surface)?;
# Ok::<(), cga_framework::cga::Error>(())
```
*/

mod input;
mod minifb_surface;

pub use input::{translate_key, InputSnapshot, InputTracker};
pub use minifb_surface::MinifbSurface;
