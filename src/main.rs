use clap::Parser;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use pixelgrid::app::App;
use pixelgrid::cli::CliArgs;
use pixelgrid::config::AppConfig;
use pixelgrid::device::{probe_touch_support, DeviceFamily, PointerTranslator};
use pixelgrid::font::FontRenderer;
use pixelgrid::graphics::GraphicsRenderer;
use pixelgrid::input::{InputAction, InputHandler};
use pixelgrid::notify::{DialogNotifier, LogNotifier, Notifier};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = CliArgs::parse();
    let mut config = AppConfig::load(args.config.as_deref())?;
    args.apply(&mut config);

    // Probed once; the resolved family is written back so nothing re-checks it.
    let family = DeviceFamily::resolve(config.device, probe_touch_support);
    config.device = family.into();
    log::info!("Binding {} input", family);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Pixel Grid")
        .with_inner_size(LogicalSize::new(config.window_width, config.window_height))
        .with_resizable(true)
        .build(&event_loop)?;

    let font = FontRenderer::load(config.font_path.as_deref(), config.font_size);
    let mut graphics = GraphicsRenderer::new(&window, font)?;

    let notifier: Box<dyn Notifier> = if config.dialog_alerts {
        Box::new(DialogNotifier::new("Pixel Grid"))
    } else {
        Box::new(LogNotifier)
    };
    let mut app = App::new(&config, notifier);
    app.set_viewport(graphics.viewport());

    let mut translator = PointerTranslator::new(family);
    let mut input_handler = InputHandler::new();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { event, .. } => {
                let pointer_event = match event {
                    WindowEvent::CloseRequested => {
                        *control_flow = ControlFlow::Exit;
                        None
                    }
                    WindowEvent::Resized(size) => {
                        graphics.resize(size.width, size.height);
                        app.set_viewport(graphics.viewport());
                        window.request_redraw();
                        None
                    }
                    WindowEvent::Focused(false) => translator.focus_lost(),
                    WindowEvent::CursorMoved { position, .. } => {
                        translator.cursor_moved(position.x, position.y)
                    }
                    WindowEvent::MouseInput {
                        state,
                        button: MouseButton::Left,
                        ..
                    } => translator.primary_button(state == ElementState::Pressed),
                    WindowEvent::Touch(touch) => translator.touch(
                        touch.id,
                        touch.phase,
                        touch.location.x,
                        touch.location.y,
                    ),
                    WindowEvent::ReceivedCharacter(character) => {
                        let action = input_handler.handle_character(character);
                        handle_input_action(&mut app, &mut input_handler, action, &window);
                        None
                    }
                    WindowEvent::KeyboardInput { input, .. } => {
                        let action = input_handler.handle_keyboard_input(&input);
                        handle_input_action(&mut app, &mut input_handler, action, &window);
                        None
                    }
                    _ => None,
                };

                if let Some(pointer_event) = pointer_event {
                    if app.pointer(pointer_event) {
                        window.request_redraw();
                    }
                }
            }
            Event::RedrawRequested(_) => {
                let layout = app.layout();
                let lines = app.console().display_lines(6);
                let status = app.status_line();
                graphics.render(app.grid(), layout, &lines, &status);

                if let Err(err) = graphics.present() {
                    log::error!("Render error: {}", err);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

fn handle_input_action<N: Notifier>(
    app: &mut App<N>,
    input_handler: &mut InputHandler,
    action: InputAction,
    window: &winit::window::Window,
) {
    match action {
        InputAction::None => return,
        InputAction::ExecuteCommand(command) => app.submit(command),
        InputAction::UpdateCommandBuffer(buffer) => app.console_mut().set_current_command(buffer),
        InputAction::UpdateCommandBufferAndResetHistory(buffer) => {
            let console = app.console_mut();
            console.set_current_command(buffer);
            console.reset_history_navigation();
        }
        InputAction::HistoryPrevious => {
            app.console_mut().history_previous();
            input_handler.set_command_buffer(app.console().current_command().to_string());
        }
        InputAction::HistoryNext => {
            app.console_mut().history_next();
            input_handler.set_command_buffer(app.console().current_command().to_string());
        }
    }
    window.request_redraw();
}
